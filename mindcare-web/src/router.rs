use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/payment")]
    Payment,
    #[at("/compliance")]
    Compliance,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Destinations listed in the header navigation, in display order.
    pub const NAV: [Self; 4] = [Self::Home, Self::About, Self::Services, Self::Compliance];

    /// Translation key for the header label.
    #[must_use]
    pub const fn nav_key(&self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Services | Self::Payment => "nav.services",
            Self::Compliance => "nav.compliance",
            Self::NotFound => "not_found.title",
        }
    }

    /// `href` including the deployment base path.
    #[must_use]
    pub fn href(&self) -> String {
        crate::config::asset_path(&self.to_path())
    }
}
