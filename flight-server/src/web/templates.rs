//! Askama templates for the web frontend.

use askama::Template;

use crate::search::Leg;

use super::dto::FlightResult;

/// Flight list fragment (search results).
#[derive(Template)]
#[template(path = "flight_list.html")]
pub struct FlightListTemplate {
    pub flights: Vec<FlightCardView>,
    /// Display name of the category prices are shown in
    pub category: String,
    pub message: Option<String>,
}

/// Flight view model for templates.
#[derive(Debug, Clone)]
pub struct FlightCardView {
    pub index: usize,
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub scales: u32,
    pub is_return: bool,
    pub price: Option<String>,
    pub price_error: Option<String>,
}

impl FlightCardView {
    /// "Direct", "1 scale" or "N scales".
    pub fn scales_label(&self) -> String {
        match self.scales {
            0 => "Direct".to_string(),
            1 => "1 scale".to_string(),
            n => format!("{n} scales"),
        }
    }

    /// Create from a flight result.
    pub fn from_result(result: &FlightResult) -> Self {
        Self {
            index: result.index,
            origin: result.origin.clone(),
            destination: result.destination.clone(),
            date: result.date.clone(),
            time: result.time.clone(),
            scales: result.scales,
            is_return: result.leg == Leg::Return,
            price: result.price.map(|p| format!("USD {p}")),
            price_error: result.price_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(scales: u32) -> FlightCardView {
        FlightCardView {
            index: 0,
            origin: "Medellín".into(),
            destination: "Bogotá".into(),
            date: "2024-10-19".into(),
            time: "19:20".into(),
            scales,
            is_return: false,
            price: Some("USD 5".into()),
            price_error: None,
        }
    }

    #[test]
    fn scales_label() {
        assert_eq!(card(0).scales_label(), "Direct");
        assert_eq!(card(1).scales_label(), "1 scale");
        assert_eq!(card(2).scales_label(), "2 scales");
    }

    #[test]
    fn render_list() {
        let template = FlightListTemplate {
            flights: vec![card(2)],
            category: "Economy".into(),
            message: None,
        };
        let html = template.render().unwrap();
        assert!(html.contains("Medellín"));
        assert!(html.contains("USD 5"));
        assert!(html.contains("2 scales"));
        assert!(html.contains("Economy"));
    }

    #[test]
    fn render_empty_list() {
        let template = FlightListTemplate {
            flights: vec![],
            category: "Economy".into(),
            message: Some("No flights found for the given criteria.".into()),
        };
        let html = template.render().unwrap();
        assert!(html.contains("No flights found for the given criteria."));
    }
}
