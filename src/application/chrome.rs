use crate::config::SiteSettings;
use crate::presentation::views::{BrandView, LayoutChrome, PageMetaView};

/// Page chrome (brand, metadata, theme) shared by every rendered page.
#[derive(Clone)]
pub struct ChromeService {
    site: SiteSettings,
}

impl ChromeService {
    pub fn new(site: SiteSettings) -> Self {
        Self { site }
    }

    pub fn load(&self) -> LayoutChrome {
        LayoutChrome {
            brand: BrandView {
                title: self.site.brand_title.clone(),
                href: self.site.brand_href.clone(),
            },
            meta: PageMetaView {
                title: self.site.meta_title.clone(),
                description: self.site.meta_description.clone(),
            },
            theme: self.site.theme.as_str(),
        }
    }
}
