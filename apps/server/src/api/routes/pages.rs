//! Static manager pages

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeFile;

/// Page routes and the file each one serves, relative to the views directory.
pub const PAGES: [(&str, &str); 3] = [
    ("/eventmanager", "eventmanager.html"),
    ("/attendeemanager", "attendeemanager.html"),
    ("/taskmanager", "taskmanager.html"),
];

pub fn page_routes(views_dir: &Path) -> Router<AppState> {
    PAGES
        .iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(*route, ServeFile::new(views_dir.join(*file)))
        })
}
