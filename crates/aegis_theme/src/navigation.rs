//! Dashboard navigation model
//!
//! A static two-level tree: functional domains, each with its views. The
//! domain keys double as keys into [`crate::domain`] so navigating can pick a
//! matching theme.

/// One view (page) inside a domain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavView {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Short counter or status shown next to the label
    pub badge: Option<&'static str>,
}

/// A top-level navigation domain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavDomain {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub views: &'static [NavView],
}

impl NavDomain {
    pub fn view(&self, key: &str) -> Option<&'static NavView> {
        self.views.iter().find(|v| v.key == key)
    }
}

const fn view(
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    badge: Option<&'static str>,
) -> NavView {
    NavView {
        key,
        label,
        icon,
        badge,
    }
}

static DOMAINS: &[NavDomain] = &[
    NavDomain {
        key: "healthcare",
        label: "Healthcare",
        icon: "heart-pulse",
        views: &[
            view("residents", "Residents", "users", None),
            view("care-plans", "Care Plans", "clipboard-list", Some("4")),
            view("medications", "Medications", "pill", Some("2")),
            view("observations", "Observations", "activity", None),
        ],
    },
    NavDomain {
        key: "workforce",
        label: "Workforce",
        icon: "briefcase",
        views: &[
            view("staff-directory", "Staff Directory", "id-card", None),
            view("rota", "Rota", "calendar", None),
            view("training-matrix", "Training Matrix", "graduation-cap", Some("12")),
            view("recruitment", "Recruitment", "user-plus", Some("new")),
        ],
    },
    NavDomain {
        key: "finance-operations",
        label: "Finance",
        icon: "wallet",
        views: &[
            view("invoicing", "Invoicing", "receipt", Some("7")),
            view("payroll", "Payroll", "banknote", None),
            view("budgets", "Budgets", "pie-chart", None),
        ],
    },
    NavDomain {
        key: "quality",
        label: "Quality",
        icon: "shield-check",
        views: &[
            view("incidents", "Incidents", "alert-triangle", Some("3")),
            view("audits", "Audits", "search-check", None),
            view("compliance", "Compliance", "badge-check", None),
        ],
    },
    NavDomain {
        key: "admin",
        label: "Administration",
        icon: "settings",
        views: &[
            view("users", "Users & Roles", "key-round", None),
            view("organisation", "Organisation", "building", None),
            view("appearance", "Appearance", "palette", None),
        ],
    },
];

/// All navigation domains in display order
pub fn domains() -> &'static [NavDomain] {
    DOMAINS
}

pub fn find_domain(key: &str) -> Option<&'static NavDomain> {
    DOMAINS.iter().find(|d| d.key == key)
}

/// Domain that owns the view `view_key`
pub fn domain_of_view(view_key: &str) -> Option<&'static NavDomain> {
    DOMAINS.iter().find(|d| d.view(view_key).is_some())
}
