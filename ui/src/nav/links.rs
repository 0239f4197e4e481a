/// A labelled destination in the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Top-level links, in display order.
pub static NAV_LINKS: [NavLink; 6] = [
    NavLink::new("Home", "/"),
    NavLink::new("About", "/About"),
    NavLink::new("Events", "/Event"),
    NavLink::new("Gallery", "/Gallery"),
    NavLink::new("Membership", "/Membership"),
    NavLink::new("Contact", "/Contact"),
];

/// Documents grouped under "Public Resources".
pub static RESOURCE_LINKS: [NavLink; 5] = [
    NavLink::new("By-laws", "/public-resources/By-Laws"),
    NavLink::new("Standing Orders", "/public-resources/standing-orders"),
    NavLink::new("Constitution", "/public-resources/Constitution"),
    NavLink::new("PCS Act 2019", "/public-resources/pcs-act-2019"),
    NavLink::new("Strategic Plan 2019-2030 PSC", "/public-resources/strategic-plan"),
];

/// The "Public Resources" dropdown sits after this many top-level links.
pub const RESOURCES_AFTER: usize = 5;

/// Links rendered before the resources dropdown.
pub fn leading() -> &'static [NavLink] {
    &NAV_LINKS[..RESOURCES_AFTER]
}

/// Links rendered after the resources dropdown.
pub fn trailing() -> &'static [NavLink] {
    &NAV_LINKS[RESOURCES_AFTER..]
}

/// Exact, case-sensitive comparison. `/About/` and `/about` do not match `/About`.
pub fn is_active(current: &str, href: &str) -> bool {
    current == href
}
