pub mod breadcrumb;
pub mod menu;
pub mod routes;
pub mod search;
pub mod tree;

pub use breadcrumb::{build_trail, render_trail, BreadcrumbItem};
pub use menu::{flatten, is_active, section_key, MenuRow, RowKind, DEFAULT_MAX_DEPTH};
pub use routes::{normalize_path, RouteLabels};
pub use search::{Category, SearchEntry, SearchGroup, SearchIndex};
pub use tree::{Icon, NavNode, NavTree, NodeId, NodeKind};
