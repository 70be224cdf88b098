/// The burger menu in the nav bar. Closed on mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuToggle {
    open: bool,
}

impl MenuToggle {
    pub fn is_open(&self) -> bool { self.open }

    pub fn toggle(&mut self) { self.open = !self.open; }

    /// Following any of the menu links closes the menu.
    pub fn close(&mut self) { self.open = false; }

    pub fn burger_class(&self) -> &'static str {
        match self.open {
            true => "burger is-open",
            false => "burger",
        }
    }

    pub fn menu_class(&self) -> &'static str {
        match self.open {
            true => "menu show",
            false => "menu",
        }
    }
}
