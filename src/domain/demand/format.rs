//! Card formatting: title, Markdown description, and date rendering.
//!
//! Pure and deterministic; the card service sends these strings as-is.

use chrono::NaiveDate;

use super::request::DemandRequest;

/// Card title: `[<type>] - <requester>`.
pub fn card_title(request: &DemandRequest) -> String {
    format!("[{}] - {}", request.request_type, request.requester)
}

/// Markdown card description embedding the details, requester, type, and
/// deadline.
pub fn card_description(request: &DemandRequest) -> String {
    format!(
        "## 📋 Detalhes da Solicitação\n\
         \n\
         {details}\n\
         \n\
         ---\n\
         \n\
         ### 👤 Informações do Solicitante\n\
         - **Solicitante:** {requester}\n\
         - **Tipo:** {request_type}\n\
         - **Prazo:** {due}\n\
         \n\
         ---\n\
         *Solicitação criada automaticamente através do formulário web.*",
        details = request.details,
        requester = request.requester,
        request_type = request.request_type,
        due = brazilian_date(request.due_date),
    )
}

/// Renders a date as `DD/MM/YYYY`.
pub fn brazilian_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DemandRequest {
        DemandRequest {
            requester: "Ana".to_string(),
            request_type: "Bug".to_string(),
            details: "A tela de login trava ao clicar duas vezes".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
        }
    }

    #[test]
    fn title_is_type_then_requester() {
        assert_eq!(card_title(&request()), "[Bug] - Ana");
    }

    #[test]
    fn brazilian_date_is_day_month_year() {
        assert_eq!(
            brazilian_date(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()),
            "07/03/2025"
        );
    }

    #[test]
    fn description_embeds_every_field() {
        let description = card_description(&request());
        assert!(description.starts_with("## 📋 Detalhes da Solicitação"));
        assert!(description.contains("A tela de login trava ao clicar duas vezes"));
        assert!(description.contains("- **Solicitante:** Ana"));
        assert!(description.contains("- **Tipo:** Bug"));
        assert!(description.contains("- **Prazo:** 07/03/2025"));
        assert!(description
            .ends_with("*Solicitação criada automaticamente através do formulário web.*"));
    }

    #[test]
    fn formatting_is_deterministic() {
        assert_eq!(card_title(&request()), card_title(&request()));
        assert_eq!(card_description(&request()), card_description(&request()));
    }
}
