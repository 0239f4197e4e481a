/// A dropdown owned by the navigation bar.
///
/// `Resources` is shared by the desktop dropdown and the group inside the
/// mobile panel; both render from the same flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    Resources,
    AccountDesktop,
    AccountMobile,
}

impl Menu {
    pub const ALL: [Menu; 3] = [Menu::Resources, Menu::AccountDesktop, Menu::AccountMobile];

    /// Rendered areas where a press counts as inside this menu.
    pub fn regions(self) -> &'static [Region] {
        match self {
            Menu::Resources => &[Region::ResourcesDesktop, Region::ResourcesMobile],
            Menu::AccountDesktop => &[Region::AccountDesktop],
            Menu::AccountMobile => &[Region::AccountMobileButton, Region::AccountMobilePanel],
        }
    }

    /// Whether a press that landed in `region` is inside this menu.
    pub fn covers(self, region: Region) -> bool {
        self.regions().contains(&region)
    }
}

/// A wrapper element the navigation bar tags with a node ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// desktop dropdown, toggle and list
    ResourcesDesktop,
    /// "Public Resources" group inside the mobile panel
    ResourcesMobile,
    AccountDesktop,
    AccountMobileButton,
    /// floating account panel, rendered outside the button's wrapper
    AccountMobilePanel,
}

/// Open/closed flags for every dropdown plus the mobile panel.
///
/// All transitions are total; there is nothing here that can fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menus {
    resources: bool,
    account_desktop: bool,
    account_mobile: bool,
    panel: bool,
}

impl Menus {
    pub fn is_open(&self, menu: Menu) -> bool {
        match menu {
            Menu::Resources => self.resources,
            Menu::AccountDesktop => self.account_desktop,
            Menu::AccountMobile => self.account_mobile,
        }
    }

    fn flag(&mut self, menu: Menu) -> &mut bool {
        match menu {
            Menu::Resources => &mut self.resources,
            Menu::AccountDesktop => &mut self.account_desktop,
            Menu::AccountMobile => &mut self.account_mobile,
        }
    }

    pub fn toggle(&mut self, menu: Menu) {
        let flag = self.flag(menu);
        *flag = !*flag;
    }

    pub fn close(&mut self, menu: Menu) {
        *self.flag(menu) = false;
    }

    pub fn panel_open(&self) -> bool {
        self.panel
    }

    pub fn toggle_panel(&mut self) {
        self.panel = !self.panel;
    }

    /// A link was followed: the mobile panel and every dropdown close.
    pub fn select_link(&mut self) {
        *self = Self::default();
    }

    /// Handles a pointer press somewhere in the document.
    ///
    /// `inside(menu)` reports whether the press landed within that menu's
    /// rendered region. Each open menu is checked on its own; the mobile
    /// panel is unaffected.
    pub fn dismiss_outside(&mut self, inside: impl Fn(Menu) -> bool) {
        for menu in Menu::ALL {
            if self.is_open(menu) && !inside(menu) {
                self.close(menu);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menus = Menus::default();
        assert!(Menu::ALL.iter().all(|m| !menus.is_open(*m)));
        assert!(!menus.panel_open());
    }

    #[test]
    fn toggle_flips_only_its_own_flag() {
        for target in Menu::ALL {
            let mut menus = Menus::default();
            menus.toggle(Menu::AccountMobile);
            let before = menus;

            menus.toggle(target);
            for other in Menu::ALL.into_iter().filter(|m| *m != target) {
                assert_eq!(menus.is_open(other), before.is_open(other));
            }
            assert_ne!(menus.is_open(target), before.is_open(target));
            assert_eq!(menus.panel_open(), before.panel_open());

            menus.toggle(target);
            assert_eq!(menus, before);
        }
    }

    #[test]
    fn press_inside_one_menu_closes_the_others() {
        let mut menus = Menus::default();
        for m in Menu::ALL {
            menus.toggle(m);
        }

        menus.dismiss_outside(|m| m == Menu::AccountDesktop);

        assert!(menus.is_open(Menu::AccountDesktop));
        assert!(!menus.is_open(Menu::Resources));
        assert!(!menus.is_open(Menu::AccountMobile));
    }

    #[test]
    fn press_outside_leaves_panel_alone() {
        let mut menus = Menus::default();
        menus.toggle_panel();
        menus.toggle(Menu::Resources);

        menus.dismiss_outside(|_| false);

        assert!(menus.panel_open());
        assert!(!menus.is_open(Menu::Resources));
    }

    #[test]
    fn closed_menus_are_not_consulted() {
        let mut menus = Menus::default();
        menus.toggle(Menu::Resources);

        menus.dismiss_outside(|m| {
            assert_eq!(m, Menu::Resources);
            true
        });
        assert!(menus.is_open(Menu::Resources));
    }

    #[test]
    fn every_region_belongs_to_exactly_one_menu() {
        let all = [
            Region::ResourcesDesktop,
            Region::ResourcesMobile,
            Region::AccountDesktop,
            Region::AccountMobileButton,
            Region::AccountMobilePanel,
        ];
        for region in all {
            let owners = Menu::ALL.iter().filter(|m| m.covers(region)).count();
            assert_eq!(owners, 1, "{region:?}");
        }
    }

    #[test]
    fn press_in_mobile_resources_group_keeps_resources_open() {
        let mut menus = Menus::default();
        menus.toggle_panel();
        menus.toggle(Menu::Resources);

        menus.dismiss_outside(|m| m.covers(Region::ResourcesMobile));

        assert!(menus.is_open(Menu::Resources));
    }

    #[test]
    fn press_on_mobile_account_panel_keeps_it_open() {
        let mut menus = Menus::default();
        menus.toggle(Menu::AccountMobile);
        menus.toggle(Menu::AccountDesktop);

        menus.dismiss_outside(|m| m.covers(Region::AccountMobilePanel));

        assert!(menus.is_open(Menu::AccountMobile));
        assert!(!menus.is_open(Menu::AccountDesktop));
    }

    #[test]
    fn desktop_account_press_does_not_cover_mobile_menu() {
        assert!(!Menu::AccountMobile.covers(Region::AccountDesktop));
        assert!(!Menu::Resources.covers(Region::AccountMobilePanel));
    }

    #[test]
    fn selecting_a_link_closes_everything() {
        let mut menus = Menus::default();
        menus.toggle_panel();
        menus.toggle(Menu::Resources);
        menus.toggle(Menu::AccountMobile);

        menus.select_link();

        assert_eq!(menus, Menus::default());
    }
}
