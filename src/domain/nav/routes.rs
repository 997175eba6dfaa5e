use std::collections::BTreeMap;

const DEFAULT_LABELS: [(&str, &str); 43] = [
    ("/", "Dashboard"),
    ("/financial", "Financial Performance"),
    ("/financial/revenue", "Revenue & Sales"),
    ("/financial/profitability", "Profitability & Margins"),
    ("/financial/india-specific", "India-Specific Financial"),
    ("/operational", "Operational Efficiency"),
    ("/operational/service", "Service & Capacity"),
    ("/operational/productivity", "Labor Productivity"),
    ("/operational/inventory", "Inventory & Assets"),
    ("/operational/accuracy", "Order Accuracy & Waste"),
    ("/customer", "Customer Experience"),
    ("/customer/acquisition", "Acquisition & Traffic"),
    ("/customer/retention", "Retention & Loyalty"),
    ("/customer/satisfaction", "Satisfaction & Reputation"),
    ("/food-cost", "Food Cost & Inventory"),
    ("/food-cost/metrics", "Cost Metrics"),
    ("/food-cost/variance", "Variance & Yield"),
    ("/food-cost/optimization", "Inventory Optimization"),
    ("/food-cost/suppliers", "Supplier Performance"),
    ("/labor", "Labor Management"),
    ("/labor/productivity", "Cost & Productivity"),
    ("/labor/stability", "Workforce Stability"),
    ("/labor/training", "Staffing & Training"),
    ("/quality", "Quality & Compliance"),
    ("/quality/safety", "Food Safety & Hygiene"),
    ("/quality/compliance", "Operational Compliance"),
    ("/digital", "Digital & Aggregator"),
    ("/digital/channels", "Digital Channel Mix"),
    ("/digital/aggregator", "Aggregator Operations"),
    ("/digital/marketing", "Marketing Performance"),
    ("/comparative", "Comparative Analytics"),
    ("/comparative/locations", "Location Performance"),
    ("/comparative/menu", "Item & Menu Analytics"),
    ("/comparative/consistency", "Operational Consistency"),
    ("/comparative/best-practices", "Best Practice ID"),
    ("/reports", "Reports"),
    ("/reports/templates", "Pre-built Templates"),
    ("/reports/builder", "Custom Report Builder"),
    ("/reports/exports", "Scheduled Exports"),
    ("/settings", "Settings"),
    ("/settings/data", "Data Configuration"),
    ("/settings/kpi", "KPI Definitions"),
    ("/settings/users", "User Permissions"),
];

/// Path -> display title lookup used by breadcrumbs and page headers
#[derive(Debug, Clone, Default)]
pub struct RouteLabels {
    labels: BTreeMap<String, String>,
}

impl RouteLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restaurant_default() -> Self {
        let labels = DEFAULT_LABELS
            .iter()
            .map(|(path, title)| (path.to_string(), title.to_string()))
            .collect();
        Self { labels }
    }

    pub fn insert(&mut self, path: impl Into<String>, title: impl Into<String>) {
        self.labels.insert(path.into(), title.into());
    }

    /// Config overrides win over built-in titles
    pub fn extend<I>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (path, title) in overrides {
            let title = title.trim();
            if title.is_empty() {
                continue;
            }
            self.labels.insert(normalize_path(&path), title.to_string());
        }
    }

    pub fn label(&self, path: &str) -> Option<&str> {
        self.labels.get(path).map(String::as_str)
    }

    /// Title for a page header: the mapped label, else the last segment
    pub fn title_for(&self, path: &str) -> String {
        if let Some(label) = self.label(path) {
            return label.to_string();
        }
        path.rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("Dashboard")
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Collapses a user-typed route into `/a/b` form
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.trim().is_empty()).collect();
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}", segments.join("/"))
}
