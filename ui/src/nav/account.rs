/// Entries of the account dropdown, identical on desktop and mobile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountItem {
    Login,
    Register,
    Profile,
    Logout,
}

impl AccountItem {
    pub const ALL: [AccountItem; 4] = [
        AccountItem::Login,
        AccountItem::Register,
        AccountItem::Profile,
        AccountItem::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AccountItem::Login => "Login",
            AccountItem::Register => "Register",
            AccountItem::Profile => "Profile Settings",
            AccountItem::Logout => "Logout",
        }
    }

    /// Page the item links to. Logout is a button, not a link.
    pub fn href(self) -> Option<&'static str> {
        match self {
            AccountItem::Login => Some("/login"),
            AccountItem::Register => Some("/register"),
            AccountItem::Profile => Some("/profile"),
            AccountItem::Logout => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AccountItem::Login => "→",
            AccountItem::Register => "+",
            AccountItem::Profile => "⚙",
            AccountItem::Logout => "⏻",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            AccountItem::Login => "text-[#002366]",
            AccountItem::Register => "text-[#9e9210]",
            AccountItem::Profile => "text-gray-500",
            AccountItem::Logout => "text-red-500",
        }
    }
}

/// Logout is not wired to any backend. Pressing it does nothing.
pub fn logout() {}
