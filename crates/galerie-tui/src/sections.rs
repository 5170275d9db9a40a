//! Page sections and the measured page layout.

/// Addressable sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Exhibitions,
    Gallery,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Exhibitions,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Menu entries, in the order the site shows them.
    pub const MENU: [SectionId; 4] = [
        SectionId::About,
        SectionId::Exhibitions,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Exhibitions => "exhibitions",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        match id {
            "home" => Some(SectionId::Home),
            "about" => Some(SectionId::About),
            "exhibitions" => Some(SectionId::Exhibitions),
            "gallery" => Some(SectionId::Gallery),
            "contact" => Some(SectionId::Contact),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Domů",
            SectionId::About => "O umělci",
            SectionId::Exhibitions => "Výstavy",
            SectionId::Gallery => "Díla",
            SectionId::Contact => "Kontakt",
        }
    }
}

/// Row positions of the rendered page, measured during composition.
///
/// `header_offset` is the margin navigation keeps above a section's top
/// edge. The page area already excludes the header, so this is a fixed
/// breathing row rather than the live header height.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    offsets: Vec<(SectionId, u16)>,
    total_height: u16,
    viewport_height: u16,
    header_offset: u16,
}

impl PageLayout {
    pub fn new(viewport_height: u16, header_offset: u16) -> Self {
        Self {
            offsets: Vec::new(),
            total_height: 0,
            viewport_height,
            header_offset,
        }
    }

    /// Record a section starting at the given page row.
    pub fn register(&mut self, section: SectionId, offset: u16) {
        self.offsets.push((section, offset));
    }

    pub fn set_total_height(&mut self, height: u16) {
        self.total_height = height;
    }

    /// Page row where a section starts, if it was rendered.
    pub fn resolve(&self, section: SectionId) -> Option<u16> {
        self.offsets
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, offset)| *offset)
    }

    /// Scroll target for a section: its top edge minus the header margin.
    pub fn scroll_target(&self, section: SectionId) -> Option<u16> {
        self.resolve(section)
            .map(|offset| offset.saturating_sub(self.header_offset))
    }

    pub fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    pub fn total_height(&self) -> u16 {
        self.total_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn header_offset(&self) -> u16 {
        self.header_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::from_id("atelier"), None);
    }

    #[test]
    fn test_resolve_and_scroll_target() {
        let mut layout = PageLayout::new(30, 4);
        layout.register(SectionId::Home, 0);
        layout.register(SectionId::Gallery, 120);
        layout.set_total_height(200);

        assert_eq!(layout.resolve(SectionId::Gallery), Some(120));
        assert_eq!(layout.scroll_target(SectionId::Gallery), Some(116));
        // Above the fold, clamps to zero instead of wrapping
        assert_eq!(layout.scroll_target(SectionId::Home), Some(0));
        assert_eq!(layout.resolve(SectionId::Contact), None);
    }

    #[test]
    fn test_max_scroll() {
        let mut layout = PageLayout::new(30, 4);
        layout.set_total_height(200);
        assert_eq!(layout.max_scroll(), 170);

        let mut short = PageLayout::new(50, 4);
        short.set_total_height(20);
        assert_eq!(short.max_scroll(), 0);
    }
}
