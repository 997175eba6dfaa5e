//! Searchable menu entries for the command palette

/// Palette group headings, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Main,
    Financial,
    Operations,
    Customer,
    FoodCost,
    Labor,
    Quality,
    Digital,
    Analytics,
    Reports,
    Settings,
}

impl Category {
    pub const ORDER: [Category; 11] = [
        Category::Main,
        Category::Financial,
        Category::Operations,
        Category::Customer,
        Category::FoodCost,
        Category::Labor,
        Category::Quality,
        Category::Digital,
        Category::Analytics,
        Category::Reports,
        Category::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Main => "Main",
            Category::Financial => "Financial",
            Category::Operations => "Operations",
            Category::Customer => "Customer",
            Category::FoodCost => "Food Cost",
            Category::Labor => "Labor",
            Category::Quality => "Quality",
            Category::Digital => "Digital",
            Category::Analytics => "Analytics",
            Category::Reports => "Reports",
            Category::Settings => "Settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub title: &'static str,
    pub path: &'static str,
    pub category: Category,
    pub keywords: &'static [&'static str],
}

impl SearchEntry {
    const fn new(
        title: &'static str,
        path: &'static str,
        category: Category,
        keywords: &'static [&'static str],
    ) -> Self {
        Self {
            title,
            path,
            category,
            keywords,
        }
    }

    /// Text the query is matched against: title, then keywords, space separated
    pub fn haystack(&self) -> String {
        let mut text = String::from(self.title);
        for keyword in self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text
    }

    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.haystack().to_lowercase().contains(&needle)
    }
}

const ENTRIES: [SearchEntry; 33] = [
    SearchEntry::new("Dashboard", "/", Category::Main, &["home", "overview", "summary"]),
    SearchEntry::new("Revenue & Sales", "/financial/revenue", Category::Financial, &["sales", "income", "money"]),
    SearchEntry::new("Profitability & Margins", "/financial/profitability", Category::Financial, &["profit", "margin", "ebitda"]),
    SearchEntry::new("India-Specific Financial", "/financial/india-specific", Category::Financial, &["gst", "tax", "aggregator"]),
    SearchEntry::new("Service & Capacity", "/operational/service", Category::Operations, &["table", "seating", "capacity"]),
    SearchEntry::new("Labor Productivity", "/operational/productivity", Category::Operations, &["staff", "efficiency", "labor"]),
    SearchEntry::new("Inventory & Assets", "/operational/inventory", Category::Operations, &["stock", "assets", "equipment"]),
    SearchEntry::new("Order Accuracy & Waste", "/operational/accuracy", Category::Operations, &["errors", "waste", "quality"]),
    SearchEntry::new("Acquisition & Traffic", "/customer/acquisition", Category::Customer, &["new customers", "marketing", "cac"]),
    SearchEntry::new("Retention & Loyalty", "/customer/retention", Category::Customer, &["repeat", "loyalty", "clv"]),
    SearchEntry::new("Satisfaction & Reputation", "/customer/satisfaction", Category::Customer, &["reviews", "nps", "ratings"]),
    SearchEntry::new("Cost Metrics", "/food-cost/metrics", Category::FoodCost, &["cogs", "food cost", "beverage"]),
    SearchEntry::new("Variance & Yield", "/food-cost/variance", Category::FoodCost, &["portion", "recipe", "yield"]),
    SearchEntry::new("Inventory Optimization", "/food-cost/optimization", Category::FoodCost, &["stock", "turnover", "par level"]),
    SearchEntry::new("Supplier Performance", "/food-cost/suppliers", Category::FoodCost, &["vendors", "otif", "quality"]),
    SearchEntry::new("Cost & Productivity", "/labor/productivity", Category::Labor, &["wages", "productivity", "efficiency"]),
    SearchEntry::new("Workforce Stability", "/labor/stability", Category::Labor, &["turnover", "retention", "tenure"]),
    SearchEntry::new("Staffing & Training", "/labor/training", Category::Labor, &["training", "certification", "skills"]),
    SearchEntry::new("Food Safety & Hygiene", "/quality/safety", Category::Quality, &["fssai", "hygiene", "safety"]),
    SearchEntry::new("Operational Compliance", "/quality/compliance", Category::Quality, &["gst", "license", "legal"]),
    SearchEntry::new("Digital Channel Mix", "/digital/channels", Category::Digital, &["online", "app", "website"]),
    SearchEntry::new("Aggregator Operations", "/digital/aggregator", Category::Digital, &["zomato", "swiggy", "delivery"]),
    SearchEntry::new("Marketing Performance", "/digital/marketing", Category::Digital, &["campaigns", "roi", "social"]),
    SearchEntry::new("Location Performance", "/comparative/locations", Category::Analytics, &["locations", "variance", "comparison"]),
    SearchEntry::new("Item & Menu Analytics", "/comparative/menu", Category::Analytics, &["menu", "items", "contribution"]),
    SearchEntry::new("Operational Consistency", "/comparative/consistency", Category::Analytics, &["consistency", "standards", "gaps"]),
    SearchEntry::new("Best Practice ID", "/comparative/best-practices", Category::Analytics, &["best practices", "optimization", "outliers"]),
    SearchEntry::new("Pre-built Templates", "/reports/templates", Category::Reports, &["templates", "reports", "export"]),
    SearchEntry::new("Custom Report Builder", "/reports/builder", Category::Reports, &["custom", "builder", "create"]),
    SearchEntry::new("Scheduled Exports", "/reports/exports", Category::Reports, &["schedule", "automation", "export"]),
    SearchEntry::new("Data Configuration", "/settings/data", Category::Settings, &["data", "sync", "config"]),
    SearchEntry::new("KPI Definitions", "/settings/kpi", Category::Settings, &["kpi", "formulas", "metrics"]),
    SearchEntry::new("User Permissions", "/settings/users", Category::Settings, &["users", "permissions", "access"]),
];

/// One palette heading with the entries that matched under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGroup<'a> {
    pub category: Category,
    pub entries: Vec<&'a SearchEntry>,
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    pub fn restaurant_default() -> Self {
        Self::new(ENTRIES.to_vec())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter(&self, query: &str) -> Vec<&SearchEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(query))
            .collect()
    }

    /// Matches grouped by [`Category::ORDER`]; empty groups are dropped
    pub fn grouped(&self, query: &str) -> Vec<SearchGroup<'_>> {
        let matches = self.filter(query);
        Category::ORDER
            .iter()
            .filter_map(|category| {
                let entries: Vec<&SearchEntry> = matches
                    .iter()
                    .copied()
                    .filter(|entry| entry.category == *category)
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(SearchGroup {
                        category: *category,
                        entries,
                    })
                }
            })
            .collect()
    }

    /// Grouped matches flattened in display order, for cursor movement
    pub fn ordered(&self, query: &str) -> Vec<&SearchEntry> {
        self.grouped(query)
            .into_iter()
            .flat_map(|group| group.entries)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haystack_joins_keywords() {
        let entry = &ENTRIES[3];
        assert_eq!(entry.haystack(), "India-Specific Financial gst tax aggregator");
    }

    #[test]
    fn test_matches_case_insensitive() {
        let index = SearchIndex::restaurant_default();
        let titles: Vec<&str> = index.filter("ZOMATO").iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Aggregator Operations"]);
    }

    #[test]
    fn test_query_spanning_title_and_keyword() {
        let index = SearchIndex::restaurant_default();
        let titles: Vec<&str> = index.filter("financial gst").iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["India-Specific Financial"]);
    }

    #[test]
    fn test_grouped_omits_empty_categories() {
        let index = SearchIndex::restaurant_default();
        let groups = index.grouped("export");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, Category::Reports);
        assert_eq!(groups[0].entries.len(), 2);
    }

    #[test]
    fn test_grouped_follows_category_order() {
        let index = SearchIndex::new(vec![
            SearchEntry::new("Users", "/settings/users", Category::Settings, &[]),
            SearchEntry::new("Home", "/", Category::Main, &[]),
        ]);
        let order: Vec<Category> = index.grouped("").iter().map(|g| g.category).collect();
        assert_eq!(order, vec![Category::Main, Category::Settings]);
        assert_eq!(index.ordered("")[0].title, "Home");
    }
}
