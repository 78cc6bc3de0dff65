//! Server-rendered pages.
//!
//! Each page is an askama template under `templates/`. Handlers build small
//! view structs from the cached catalog so templates never reach into
//! lookups themselves.

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::{error, info, warn};

use super::AppState;
use crate::constants::APP_NAME;
use crate::models::{App, AppsData, Category};
use crate::submission::{FieldError, ToolSubmission};

// ============================================================================
// View Models
// ============================================================================

/// Header state shared by every page.
#[derive(Debug, Clone)]
pub struct Chrome {
    /// Brand name
    pub site_name: String,
    /// Category shown next to the brand (empty for none)
    pub crumb_name: String,
    /// Link for the header crumb
    pub crumb_href: String,
}

impl Chrome {
    fn new(state: &AppState) -> Self {
        Self {
            site_name: state.site_name().to_string(),
            crumb_name: String::new(),
            crumb_href: String::new(),
        }
    }

    fn with_crumb(mut self, category: &Category) -> Self {
        self.crumb_name = category.name.clone();
        self.crumb_href = category_href(&category.id);
        self
    }
}

/// A category card on the home page.
#[derive(Debug, Clone)]
pub struct CategoryCard {
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Number of apps in the category
    pub app_count: usize,
    /// Link to the category view
    pub href: String,
}

/// An app card in a category grid.
#[derive(Debug, Clone)]
pub struct AppCard {
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Icon reference
    pub icon: String,
    /// Icon fallback letter
    pub initial: String,
    /// First pros
    pub pros: Vec<String>,
    /// Detail page link
    pub href: String,
}

impl From<&App> for AppCard {
    fn from(app: &App) -> Self {
        Self {
            name: app.name.clone(),
            description: app.description.clone(),
            icon: app.icon_or_placeholder().to_string(),
            initial: app.initial(),
            pros: app.card_pros().to_vec(),
            href: app.detail_path(),
        }
    }
}

/// One breadcrumb entry; the last entry is rendered as plain text.
#[derive(Debug, Clone)]
pub struct Crumb {
    /// Text
    pub label: String,
    /// Target
    pub href: String,
}

/// An option in the submission form's category select.
#[derive(Debug, Clone)]
pub struct CategoryOption {
    /// Category id
    pub id: String,
    /// Display name
    pub name: String,
    /// Whether the option is pre-selected
    pub selected: bool,
}

fn category_href(id: &str) -> String {
    format!("/?category={id}")
}

// ============================================================================
// Templates
// ============================================================================

/// Home page: category grid, or one category's apps.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Header
    pub chrome: Chrome,
    /// True when showing a single category
    pub category_view: bool,
    /// Selected category name
    pub category_name: String,
    /// Selected category description
    pub category_description: String,
    /// Category cards (category grid)
    pub categories: Vec<CategoryCard>,
    /// App cards (category view)
    pub apps: Vec<AppCard>,
}

impl HomeTemplate {
    /// Builds the page for an optional `?category=` parameter.
    ///
    /// An unknown category id falls back to the category grid.
    pub fn build(chrome: Chrome, data: &AppsData, category_id: Option<&str>) -> Self {
        match category_id.and_then(|id| data.category(id)) {
            Some(category) => Self {
                chrome: chrome.with_crumb(category),
                category_view: true,
                category_name: category.name.clone(),
                category_description: category.description.clone(),
                categories: Vec::new(),
                apps: data
                    .apps_in_category(&category.id)
                    .map(AppCard::from)
                    .collect(),
            },
            None => Self {
                chrome,
                category_view: false,
                category_name: String::new(),
                category_description: String::new(),
                categories: data
                    .categories
                    .iter()
                    .map(|cat| CategoryCard {
                        name: cat.name.clone(),
                        description: cat.description.clone(),
                        app_count: data.app_count(&cat.id),
                        href: category_href(&cat.id),
                    })
                    .collect(),
                apps: Vec::new(),
            },
        }
    }
}

/// App detail page.
#[derive(Template)]
#[template(path = "app.html")]
pub struct AppTemplate {
    /// Header
    pub chrome: Chrome,
    /// Home / Category / App
    pub breadcrumb: Vec<Crumb>,
    /// Category name for the badge (empty for a dangling reference)
    pub category_name: String,
    /// The app
    pub app: App,
    /// Icon reference
    pub icon: String,
    /// Icon fallback letter
    pub initial: String,
    /// Screenshot references
    pub screenshots: Vec<String>,
}

impl AppTemplate {
    /// Builds the detail page for an app.
    pub fn build(chrome: Chrome, data: &AppsData, app: &App) -> Self {
        let category = data.category_of(app);

        let mut breadcrumb = vec![Crumb {
            label: "Home".to_string(),
            href: "/".to_string(),
        }];
        if let Some(cat) = category {
            breadcrumb.push(Crumb {
                label: cat.name.clone(),
                href: category_href(&cat.id),
            });
        }
        breadcrumb.push(Crumb {
            label: app.name.clone(),
            href: String::new(),
        });

        Self {
            chrome,
            breadcrumb,
            category_name: category.map(|c| c.name.clone()).unwrap_or_default(),
            icon: app.icon_or_placeholder().to_string(),
            initial: app.initial(),
            screenshots: app.screenshots().to_vec(),
            app: app.clone(),
        }
    }
}

/// Submission form.
#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitTemplate {
    /// Header
    pub chrome: Chrome,
    /// Category select options
    pub categories: Vec<CategoryOption>,
    /// Values to re-fill
    pub form: ToolSubmission,
    /// Problems from the last post
    pub errors: Vec<FieldError>,
}

impl SubmitTemplate {
    /// Builds the form, pre-filled with `form`.
    pub fn build(
        chrome: Chrome,
        data: &AppsData,
        form: ToolSubmission,
        errors: Vec<FieldError>,
    ) -> Self {
        let categories = data
            .categories
            .iter()
            .map(|cat| CategoryOption {
                id: cat.id.clone(),
                name: cat.name.clone(),
                selected: cat.id == form.category,
            })
            .collect();

        Self {
            chrome,
            categories,
            form,
            errors,
        }
    }
}

/// Submission acknowledgement.
#[derive(Template)]
#[template(path = "submitted.html")]
pub struct SubmittedTemplate {
    /// Header
    pub chrome: Chrome,
    /// Submitted tool name
    pub name: String,
    /// Receipt reference
    pub reference: String,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    /// Header
    pub chrome: Chrome,
    /// Number of listed apps
    pub app_count: usize,
    /// Number of categories
    pub category_count: usize,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    /// Header
    pub chrome: Chrome,
    /// Headline
    pub title: String,
    /// Explanation
    pub message: String,
}

// ============================================================================
// Rendering
// ============================================================================

fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template error: {e}");
            render_failure()
        }
    }
}

/// The "Oops" page, served when a page template fails to render.
fn render_failure() -> Response {
    let template = ErrorTemplate {
        chrome: Chrome {
            site_name: APP_NAME.to_string(),
            crumb_name: String::new(),
            crumb_href: String::new(),
        },
        title: "Oops! Something went wrong".to_string(),
        message: "We could not display this page. Please try again later.".to_string(),
    };
    let html = template
        .render()
        .unwrap_or_else(|_| "<h1>Oops! Something went wrong</h1>".to_string());

    (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
}

fn error_page(state: &AppState, status: StatusCode, title: &str, message: &str) -> Response {
    let template = ErrorTemplate {
        chrome: Chrome::new(state),
        title: title.to_string(),
        message: message.to_string(),
    };
    render(status, &template)
}

// ============================================================================
// Handlers
// ============================================================================

/// Query parameters of the home page.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// Category to show instead of the category grid
    pub category: Option<String>,
}

/// GET / - Category grid or one category's apps.
pub async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Response {
    let data = state.store().apps_data().await;

    let template = HomeTemplate::build(Chrome::new(&state), &data, query.category.as_deref());
    render(StatusCode::OK, &template)
}

/// GET /app/{id} - App detail page.
pub async fn app_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let data = state.store().apps_data().await;

    let Some(app) = data.app(&id) else {
        return not_found(State(state)).await;
    };

    let template = AppTemplate::build(Chrome::new(&state), &data, app);
    render(StatusCode::OK, &template)
}

/// GET /about - About page.
pub async fn about(State(state): State<AppState>) -> Response {
    let data = state.store().apps_data().await;

    let template = AboutTemplate {
        chrome: Chrome::new(&state),
        app_count: data.apps.len(),
        category_count: data.categories.len(),
    };
    render(StatusCode::OK, &template)
}

/// GET /submit-tool - Empty submission form.
pub async fn submit_form(State(state): State<AppState>) -> Response {
    let data = state.store().apps_data().await;

    let template = SubmitTemplate::build(
        Chrome::new(&state),
        &data,
        ToolSubmission::default(),
        Vec::new(),
    );
    render(StatusCode::OK, &template)
}

/// POST /submit-tool - Validate and acknowledge a submission.
///
/// Accepted submissions are logged only.
pub async fn submit_tool(
    State(state): State<AppState>,
    Form(form): Form<ToolSubmission>,
) -> Response {
    let data = state.store().apps_data().await;

    match form.accept(&data) {
        Ok(receipt) => {
            info!(
                submission_id = %receipt.id,
                name = %receipt.name,
                url = %form.url.trim(),
                category = %form.category,
                "Received tool submission"
            );
            let template = SubmittedTemplate {
                chrome: Chrome::new(&state),
                name: receipt.name,
                reference: receipt.id.to_string(),
            };
            render(StatusCode::OK, &template)
        }
        Err(errors) => {
            warn!("Rejected tool submission with {} errors", errors.len());
            let template = SubmitTemplate::build(Chrome::new(&state), &data, form, errors);
            render(StatusCode::UNPROCESSABLE_ENTITY, &template)
        }
    }
}

/// Fallback - 404 page.
pub async fn not_found(State(state): State<AppState>) -> Response {
    error_page(
        &state,
        StatusCode::NOT_FOUND,
        "Page not found",
        "The page you are looking for does not exist.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::CatalogStore;

    fn app(id: &str, category: &str, pros: &[&str]) -> App {
        App {
            id: id.to_string(),
            name: format!("{id}-name"),
            category: category.to_string(),
            icon: String::new(),
            url: format!("https://{id}.example"),
            description: format!("{id} description"),
            overview: format!("{id} overview"),
            pros: pros.iter().map(ToString::to_string).collect(),
            cons: vec!["Pricey".to_string()],
            screenshots: None,
        }
    }

    fn data() -> AppsData {
        AppsData {
            categories: vec![
                Category::new("design", "Design", "Visual tools").unwrap(),
                Category::new("productivity", "Productivity", "Get things done").unwrap(),
            ],
            apps: vec![
                app("figma", "design", &["Realtime", "Free tier", "Plugins"]),
                app("notion", "productivity", &["Flexible"]),
                app("orphan", "missing", &[]),
            ],
        }
    }

    fn chrome() -> Chrome {
        let state = AppState::with_store(CatalogStore::with_data("apps.yaml", data()), "catalyst");
        Chrome::new(&state)
    }

    #[test]
    fn test_home_category_grid_counts() {
        let data = data();
        let page = HomeTemplate::build(chrome(), &data, None);
        assert!(!page.category_view);
        assert_eq!(page.categories.len(), 2);
        assert_eq!(page.categories[0].app_count, 1);
        assert_eq!(page.categories[0].href, "/?category=design");

        let html = page.render().unwrap();
        assert!(html.contains("1 tools"));
        assert!(html.contains("Visual tools"));
    }

    #[test]
    fn test_home_category_view() {
        let data = data();
        let page = HomeTemplate::build(chrome(), &data, Some("design"));
        assert!(page.category_view);
        assert_eq!(page.chrome.crumb_name, "Design");
        assert_eq!(page.apps.len(), 1);
        assert_eq!(page.apps[0].pros, vec!["Realtime", "Free tier"]);

        let html = page.render().unwrap();
        assert!(html.contains("figma-name"));
        assert!(!html.contains("Plugins"));
        assert_eq!(page.apps[0].href, "/app/figma");
    }

    #[test]
    fn test_home_unknown_category_falls_back_to_grid() {
        let data = data();
        let page = HomeTemplate::build(chrome(), &data, Some("nope"));
        assert!(!page.category_view);
        assert_eq!(page.categories.len(), 2);
    }

    #[test]
    fn test_app_breadcrumb_with_category() {
        let data = data();
        let page = AppTemplate::build(chrome(), &data, data.app("figma").unwrap());
        let labels: Vec<&str> = page.breadcrumb.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Design", "figma-name"]);
        assert_eq!(page.breadcrumb[1].href, "/?category=design");

        let html = page.render().unwrap();
        assert!(html.contains("Ready to try figma-name?"));
        assert!(html.contains("noopener noreferrer"));
        assert!(html.contains("Pricey"));
    }

    #[test]
    fn test_app_dangling_category_omits_crumb_and_badge() {
        let data = data();
        let page = AppTemplate::build(chrome(), &data, data.app("orphan").unwrap());
        assert_eq!(page.breadcrumb.len(), 2);
        assert_eq!(page.category_name, "");
        assert!(!page.render().unwrap().contains("category-badge"));
    }

    #[test]
    fn test_templates_escape_catalog_text() {
        let mut data = data();
        data.apps[0].name = "<script>alert(1)</script>".to_string();
        let page = AppTemplate::build(chrome(), &data, &data.apps[0]);
        let html = page.render().unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_submit_form_preselects_category() {
        let data = data();
        let form = ToolSubmission {
            category: "productivity".to_string(),
            ..ToolSubmission::default()
        };
        let page = SubmitTemplate::build(chrome(), &data, form, Vec::new());
        assert!(!page.categories[0].selected);
        assert!(page.categories[1].selected);
        assert!(page.render().unwrap().contains("Submit Tool for Review"));
    }

    #[test]
    fn test_home_empty_catalog_renders_empty_grid() {
        let page = HomeTemplate::build(chrome(), &AppsData::empty(), None);
        assert!(!page.category_view);
        assert!(page.categories.is_empty());
        assert!(page.render().unwrap().contains("Curated"));
    }

    #[tokio::test]
    async fn test_render_failure_is_oops_page() {
        let response = render_failure();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Oops! Something went wrong"));
        assert!(html.contains("Try Again"));
    }
}
