use serde::{Deserialize, Serialize};

/// Declared lifecycle stage of an exhibition.
///
/// This is the label assigned when the record is authored; the stage shown
/// to visitors is recomputed from the calendar on every read, see
/// [`super::status::calculated_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    Current,
    Upcoming,
    Past,
}

/// One gallery event.
///
/// Records are defined statically at build time and never mutated at
/// runtime. Dates are Czech-formatted strings ("2. 2. 2026") and must go
/// through [`super::dates::parse_czech_date`], never a generic parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exhibition {
    pub id: u32,
    pub title: String,
    pub venue: Option<String>,
    pub location: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub date_tentative: Option<String>,
    pub description: Option<String>,
    pub status: ExhibitionStatus,
    pub confirmed: bool,
    /// Poster path relative to the configured assets directory
    pub poster_image: Option<String>,
    pub admission: Option<String>,
    pub vernissage: Option<String>,
    pub map_url: Option<String>,
}

impl Exhibition {
    /// Venue and location line, with fallbacks for unconfirmed events.
    pub fn location_display(&self) -> String {
        match (self.venue.as_deref(), self.location.as_deref()) {
            (Some(venue), Some(location)) => format!("{venue}, {location}"),
            (Some(venue), None) => venue.to_string(),
            (None, Some(location)) => format!("{location} (místo bude upřesněno)"),
            (None, None) => "Místo bude upřesněno".to_string(),
        }
    }

    /// Date range line, falling back to the tentative text.
    pub fn date_display(&self) -> String {
        match (self.date_from.as_deref(), self.date_to.as_deref()) {
            (Some(from), Some(to)) => format!("{from} — {to}"),
            (Some(from), None) => format!("Od {from}"),
            _ => self
                .date_tentative
                .clone()
                .unwrap_or_else(|| "Datum bude upřesněno".to_string()),
        }
    }
}

/// Czech status label. An unconfirmed exhibition always reads as
/// "in negotiation", whatever its computed stage.
pub fn status_label(status: ExhibitionStatus, confirmed: bool) -> &'static str {
    if !confirmed {
        return "V jednání";
    }
    match status {
        ExhibitionStatus::Current => "Právě probíhá",
        ExhibitionStatus::Upcoming => "Nadcházející",
        ExhibitionStatus::Past => "Proběhlo",
    }
}

/// The static exhibition list shared by the banner and the exhibitions
/// section.
pub fn exhibitions() -> Vec<Exhibition> {
    vec![
        Exhibition {
            id: 1,
            title: "Obrazové Střípky Antonína Kroči".to_string(),
            venue: Some("Obřadní Síň v Hukvaldském Dvoře".to_string()),
            location: Some("Hukvaldy".to_string()),
            date_from: Some("2. 2. 2026".to_string()),
            date_to: Some("20. 2. 2026".to_string()),
            date_tentative: None,
            description: Some("Vzpomínková Výstava ze Soukromých Sbírek".to_string()),
            status: ExhibitionStatus::Upcoming,
            confirmed: true,
            poster_image: Some("exhibitions/hukvaldy-unor-2026.jpg".to_string()),
            admission: Some("Dobrovolné".to_string()),
            vernissage: Some("2. 2. 2026 v 17:00".to_string()),
            map_url: Some("https://maps.app.goo.gl/qo5HYYGQPBxtGgBw9".to_string()),
        },
        Exhibition {
            id: 2,
            title: "Vernisáž Výstavy Akademického Malíře Antonína Kroči".to_string(),
            venue: Some("Galerie Mlejn".to_string()),
            location: Some("Moravská Ostrava, Nádražní 3136/138A".to_string()),
            date_from: None,
            date_to: None,
            date_tentative: Some("Březen 2026".to_string()),
            description: None,
            status: ExhibitionStatus::Upcoming,
            confirmed: false,
            poster_image: Some("exhibitions/mlejn-brezen-2026.jpeg".to_string()),
            admission: Some("Dobrovolné".to_string()),
            vernissage: Some("2. 2. 2026 v 17:00".to_string()),
            map_url: Some("https://maps.app.goo.gl/bxLCUVzv69Uzc8Y1A".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfirmed_always_in_negotiation() {
        for status in [
            ExhibitionStatus::Current,
            ExhibitionStatus::Upcoming,
            ExhibitionStatus::Past,
        ] {
            assert_eq!(status_label(status, false), "V jednání");
        }
        assert_eq!(status_label(ExhibitionStatus::Current, true), "Právě probíhá");
    }

    #[test]
    fn test_location_display_fallbacks() {
        let mut ex = exhibitions().remove(0);
        assert_eq!(
            ex.location_display(),
            "Obřadní Síň v Hukvaldském Dvoře, Hukvaldy"
        );

        ex.location = None;
        assert_eq!(ex.location_display(), "Obřadní Síň v Hukvaldském Dvoře");

        ex.venue = None;
        assert_eq!(ex.location_display(), "Místo bude upřesněno");
    }

    #[test]
    fn test_date_display() {
        let exhibitions = exhibitions();
        assert_eq!(exhibitions[0].date_display(), "2. 2. 2026 — 20. 2. 2026");
        assert_eq!(exhibitions[1].date_display(), "Březen 2026");

        let mut ex = exhibitions[0].clone();
        ex.date_to = None;
        assert_eq!(ex.date_display(), "Od 2. 2. 2026");
        ex.date_from = None;
        assert_eq!(ex.date_display(), "Datum bude upřesněno");
    }
}
