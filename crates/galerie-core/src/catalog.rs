use serde::{Deserialize, Serialize};

/// Layout hint for the gallery grid, mirroring the site's bento spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridSpan {
    /// Tall card, one column
    Portrait,
    /// Wide card, two columns
    Landscape,
    /// Full-width feature card
    Feature,
    /// Single cell
    Square,
}

/// One artwork in the permanent collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u32,
    pub title: String,
    pub year: String,
    pub dimensions: String,
    pub medium: String,
    /// Image path relative to the configured assets directory
    pub image: String,
    pub span: GridSpan,
}

/// The featured works shown in the gallery section. Static, never
/// mutated at runtime.
pub fn artworks() -> Vec<Artwork> {
    vec![
        Artwork {
            id: 1,
            title: "Sedící akt".to_string(),
            year: "1998".to_string(),
            dimensions: "100 × 70 cm".to_string(),
            medium: "Uhel, papír".to_string(),
            image: "gallery/22.jpeg".to_string(),
            span: GridSpan::Portrait,
        },
        Artwork {
            id: 2,
            title: "Hukvaldy".to_string(),
            year: "2007".to_string(),
            dimensions: "61 × 80 cm".to_string(),
            medium: "Olej, sololit".to_string(),
            image: "gallery/75.jpeg".to_string(),
            span: GridSpan::Landscape,
        },
        Artwork {
            id: 3,
            title: "Potok".to_string(),
            year: "2016".to_string(),
            dimensions: "61 × 80 cm".to_string(),
            medium: "Olej, sololit".to_string(),
            image: "gallery/91.jpeg".to_string(),
            span: GridSpan::Landscape,
        },
        Artwork {
            id: 4,
            title: "Zátiší s kyticí ve váze".to_string(),
            year: "Nedatováno".to_string(),
            dimensions: "93 × 62 cm".to_string(),
            medium: "Olej, sololit".to_string(),
            image: "gallery/1351.jpeg".to_string(),
            span: GridSpan::Portrait,
        },
        Artwork {
            id: 5,
            title: "Velká zabíjačka".to_string(),
            year: "1982".to_string(),
            dimensions: "240 × 400 cm".to_string(),
            medium: "Olej na plátně".to_string(),
            image: "gallery/103.jpeg".to_string(),
            span: GridSpan::Feature,
        },
        Artwork {
            id: 6,
            title: "Milada".to_string(),
            year: "Nedatováno".to_string(),
            dimensions: "65 × 50 cm".to_string(),
            medium: "Olej, sololit".to_string(),
            image: "gallery/milada.jpeg".to_string(),
            span: GridSpan::Square,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique() {
        let works = artworks();
        let mut ids: Vec<u32> = works.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), works.len());
    }
}
