//! Breadcrumb trail derived from the current route

use super::routes::RouteLabels;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub title: String,
    pub path: String,
    pub is_active: bool,
}

impl BreadcrumbItem {
    fn new(title: impl Into<String>, path: impl Into<String>, is_active: bool) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            is_active,
        }
    }
}

/// Builds the trail for `path`. The root yields an empty trail.
pub fn build_trail(path: &str, labels: &RouteLabels) -> Vec<BreadcrumbItem> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Vec::new();
    }

    let mut trail = Vec::with_capacity(segments.len() + 1);
    trail.push(BreadcrumbItem::new("Dashboard", "/", false));

    let mut prefix = String::new();
    for (idx, &segment) in segments.iter().enumerate() {
        prefix.push('/');
        prefix.push_str(segment);
        let title = labels.label(&prefix).unwrap_or(segment);
        let is_active = idx + 1 == segments.len();
        trail.push(BreadcrumbItem::new(title, prefix.clone(), is_active));
    }
    trail
}

/// Header rendering of a trail: `Dashboard > Financial Performance > Revenue & Sales`
pub fn render_trail(trail: &[BreadcrumbItem]) -> String {
    trail
        .iter()
        .map(|item| item.title.as_str())
        .collect::<Vec<_>>()
        .join(" > ")
}
