//! Static navigation tree stored as an arena of nodes

/// Index of a node inside a [`NavTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

/// Icons shown next to top-level entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    Financial,
    Operations,
    Customers,
    FoodCost,
    Labor,
    Quality,
    Digital,
    Analytics,
    Reports,
    Settings,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Dashboard => "▤",
            Icon::Financial => "₹",
            Icon::Operations => "⚙",
            Icon::Customers => "☺",
            Icon::FoodCost => "◈",
            Icon::Labor => "⚒",
            Icon::Quality => "✚",
            Icon::Digital => "◎",
            Icon::Analytics => "↗",
            Icon::Reports => "☰",
            Icon::Settings => "✱",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavNode {
    pub title: String,
    pub path: Option<String>,
    pub icon: Option<Icon>,
    pub children: Vec<NodeId>,
}

/// How a node behaves when rendered at a depth that still allows nesting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// No path, no children
    Header,
    /// Path, no children
    Link,
    /// Has children
    Section,
}

impl NavNode {
    pub fn kind(&self) -> NodeKind {
        if !self.children.is_empty() {
            NodeKind::Section
        } else if self.path.is_some() {
            NodeKind::Link
        } else {
            NodeKind::Header
        }
    }
}

/// Arena-backed navigation tree. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NavTree {
    nodes: Vec<NavNode>,
    roots: Vec<NodeId>,
}

impl NavTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, title: &str, path: Option<&str>, icon: Option<Icon>) -> NodeId {
        let id = self.push(title, path, icon);
        self.roots.push(id);
        id
    }

    /// Appends a child under `parent`. Returns `None` if `parent` is not in this tree.
    pub fn add_child(&mut self, parent: NodeId, title: &str, path: Option<&str>) -> Option<NodeId> {
        if parent.0 >= self.nodes.len() {
            return None;
        }
        let id = self.push(title, path, None);
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&NavNode> {
        self.nodes.get(id.0)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NavNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeId(idx), node))
    }

    /// Finds the node whose path equals `path` exactly
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.path.as_deref() == Some(path))
            .map(|(id, _)| id)
    }

    fn push(&mut self, title: &str, path: Option<&str>, icon: Option<Icon>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NavNode {
            title: title.to_string(),
            path: path.map(str::to_string),
            icon,
            children: Vec::new(),
        });
        id
    }

    /// The restaurant analytics sidebar
    pub fn restaurant_default() -> Self {
        let mut tree = Self::new();
        tree.add_root("Dashboard", Some("/"), Some(Icon::Dashboard));

        let sections: [(&str, &str, Icon, &[(&str, &str)]); 10] = [
            (
                "Financial Performance",
                "/financial",
                Icon::Financial,
                &[
                    ("Revenue & Sales", "/financial/revenue"),
                    ("Profitability & Margins", "/financial/profitability"),
                    ("India-Specific Financial", "/financial/india-specific"),
                ],
            ),
            (
                "Operational Efficiency",
                "/operational",
                Icon::Operations,
                &[
                    ("Service & Capacity", "/operational/service"),
                    ("Labor Productivity", "/operational/productivity"),
                    ("Inventory & Assets", "/operational/inventory"),
                    ("Order Accuracy & Waste", "/operational/accuracy"),
                ],
            ),
            (
                "Customer Experience",
                "/customer",
                Icon::Customers,
                &[
                    ("Acquisition & Traffic", "/customer/acquisition"),
                    ("Retention & Loyalty", "/customer/retention"),
                    ("Satisfaction & Reputation", "/customer/satisfaction"),
                ],
            ),
            (
                "Food Cost & Inventory",
                "/food-cost",
                Icon::FoodCost,
                &[
                    ("Cost Metrics", "/food-cost/metrics"),
                    ("Variance & Yield", "/food-cost/variance"),
                    ("Inventory Optimization", "/food-cost/optimization"),
                    ("Supplier Performance", "/food-cost/suppliers"),
                ],
            ),
            (
                "Labor Management",
                "/labor",
                Icon::Labor,
                &[
                    ("Cost & Productivity", "/labor/productivity"),
                    ("Workforce Stability", "/labor/stability"),
                    ("Staffing & Training", "/labor/training"),
                ],
            ),
            (
                "Quality & Compliance",
                "/quality",
                Icon::Quality,
                &[
                    ("Food Safety & Hygiene", "/quality/safety"),
                    ("Operational Compliance", "/quality/compliance"),
                ],
            ),
            (
                "Digital & Aggregator",
                "/digital",
                Icon::Digital,
                &[
                    ("Digital Channel Mix", "/digital/channels"),
                    ("Aggregator Operations", "/digital/aggregator"),
                    ("Marketing Performance", "/digital/marketing"),
                ],
            ),
            (
                "Comparative Analytics",
                "/comparative",
                Icon::Analytics,
                &[
                    ("Location Performance", "/comparative/locations"),
                    ("Item & Menu Analytics", "/comparative/menu"),
                    ("Operational Consistency", "/comparative/consistency"),
                    ("Best Practice ID", "/comparative/best-practices"),
                ],
            ),
            (
                "Reports",
                "/reports",
                Icon::Reports,
                &[
                    ("Pre-built Templates", "/reports/templates"),
                    ("Custom Report Builder", "/reports/builder"),
                    ("Scheduled Exports", "/reports/exports"),
                ],
            ),
            (
                "Settings",
                "/settings",
                Icon::Settings,
                &[
                    ("Data Configuration", "/settings/data"),
                    ("KPI Definitions", "/settings/kpi"),
                    ("User Permissions", "/settings/users"),
                ],
            ),
        ];

        for (title, path, icon, items) in sections {
            let section = tree.add_root(title, Some(path), Some(icon));
            for (child_title, child_path) in items {
                let _ = tree.add_child(section, child_title, Some(child_path));
            }
        }
        tree
    }
}
