//! The individual extraction rules
//!
//! Every rule scans the full text on its own and degrades to an absent value
//! instead of failing.

use crate::patterns::{
    is_line_boundary, BAGGAGE_LOSS_PHRASE, DELAY_WORD, ESCAPED_CURRENCY, FLIGHT_WORD,
    MORAL_DAMAGES_PHRASE, RE_AMOUNT, RE_AUTHOR, RE_DEADLINE,
};
use chrono::{Datelike, Days, NaiveDate};
use contestation_domain::CaseType;
use tracing::{debug, warn};

/// Number of closing lines that make up the description
const DESCRIPTION_LINES: usize = 3;

/// Latest year a deadline may fall in; anything later is treated as out of range
const MAX_DEADLINE_YEAR: i32 = 9999;

/// Separator placed between description lines
const DESCRIPTION_SEPARATOR: &str = ". ";

/// Extract the plaintiff's name from the first `Autor:` / `Autora:` line
///
/// # Examples
///
/// ```
/// use contestation_extractor::extract_author;
///
/// assert_eq!(extract_author("AUTORA:  Maria Souza \nRéu: X").as_deref(), Some("Maria Souza"));
/// assert_eq!(extract_author("Petição sem partes"), None);
/// ```
pub fn extract_author(text: &str) -> Option<String> {
    let author = RE_AUTHOR
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());

    debug!("Author rule: {:?}", author);
    author
}

/// Compute the response deadline from an `N dias úteis` mention
///
/// Business days are counted as calendar days. A deadline after the year
/// 9999 yields `None`.
pub fn extract_deadline(text: &str, today: NaiveDate) -> Option<NaiveDate> {
    let digits = RE_DEADLINE.captures(text)?.get(1)?.as_str();

    let days: u64 = match digits.parse() {
        Ok(days) => days,
        Err(e) => {
            warn!("Deadline day count '{}' is not usable: {}", digits, e);
            return None;
        }
    };

    let deadline = today
        .checked_add_days(Days::new(days))
        .filter(|date| date.year() <= MAX_DEADLINE_YEAR);
    if deadline.is_none() {
        warn!("Deadline of {} days from {} is out of calendar range", days, today);
    }

    debug!("Deadline rule: {} days -> {:?}", days, deadline);
    deadline
}

/// Extract the monetary value of the case from `R$` amounts
///
/// Amounts are accumulated in document order and the scan stops as soon as
/// the running total is positive. A leading `R$ 0,00` is therefore added to
/// the following amount, while two positive amounts only count the first.
/// Amounts that do not parse after normalisation are skipped.
///
/// # Examples
///
/// ```
/// use contestation_extractor::extract_case_value;
///
/// assert_eq!(extract_case_value("Valor: R$ 1.234,56 e R$ 10,00"), 1234.56);
/// assert_eq!(extract_case_value("Sem valores"), 0.0);
/// ```
pub fn extract_case_value(text: &str) -> f64 {
    let normalized = text.replace(ESCAPED_CURRENCY, "$");

    let mut total = 0.0;
    for caps in RE_AMOUNT.captures_iter(&normalized) {
        // A trailing `,` or `.` is sentence punctuation, not part of the amount.
        let raw = caps[1].trim_end_matches([',', '.']);
        let numeric = raw.replace('.', "").replace(',', ".");

        match numeric.parse::<f64>() {
            Ok(value) => {
                total += value;
                if total > 0.0 {
                    break;
                }
            }
            Err(_) => debug!("Skipping unparsable amount 'R$ {}'", raw),
        }
    }

    debug!("Case value rule: {}", total);
    total
}

/// Classify the petition, first matching category wins
///
/// Priority: baggage loss, flight delay (`voo` and `atraso` on one line, in
/// any order), moral damages, other.
pub fn classify_case(text: &str) -> CaseType {
    let lowered = text.to_lowercase();

    let case_type = if lowered.contains(BAGGAGE_LOSS_PHRASE) {
        CaseType::BaggageLoss
    } else if lowered
        .split(is_line_boundary)
        .any(|line| line.contains(FLIGHT_WORD) && line.contains(DELAY_WORD))
    {
        CaseType::FlightDelay
    } else if lowered.contains(MORAL_DAMAGES_PHRASE) {
        CaseType::MoralDamages
    } else {
        CaseType::Other
    };

    debug!("Classification rule: {}", case_type);
    case_type
}

/// Summarise the petition with its last three `\n`-separated lines
///
/// A trailing newline counts as an empty last line.
pub fn extract_description(text: &str) -> Option<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = lines.len().saturating_sub(DESCRIPTION_LINES);
    let description = lines[start..].join(DESCRIPTION_SEPARATOR).trim().to_string();

    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_author_variants() {
        assert_eq!(extract_author("Autor: João Silva").as_deref(), Some("João Silva"));
        assert_eq!(extract_author("autora:Ana\n").as_deref(), Some("Ana"));
        assert_eq!(extract_author("Nome do Autor:\tPedro\r\nRéu: Y").as_deref(), Some("Pedro"));
    }

    #[test]
    fn test_author_first_match_only() {
        let text = "Autor: Primeiro\nAutora: Segunda";
        assert_eq!(extract_author(text).as_deref(), Some("Primeiro"));
    }

    #[test]
    fn test_author_skips_blank_line_and_requires_colon() {
        assert_eq!(extract_author("Autor:\nJoão").as_deref(), None);
        assert_eq!(extract_author("O autor alega atraso"), None);
        assert_eq!(
            extract_author("Autor:   \nAutora: Carla").as_deref(),
            Some("Carla")
        );
    }

    #[test]
    fn test_deadline() {
        let today = date(2026, 10, 19);
        assert_eq!(extract_deadline("prazo de 15 dias úteis", today), Some(date(2026, 11, 3)));
        assert_eq!(extract_deadline("0 dias úteis", today), Some(today));
        assert_eq!(extract_deadline("10dias úteis", today), Some(date(2026, 10, 29)));
        assert_eq!(extract_deadline("quinze dias úteis", today), None);
        assert_eq!(extract_deadline("15 dias corridos", today), None);
    }

    #[test]
    fn test_deadline_uses_first_mention() {
        let today = date(2026, 1, 1);
        let text = "5 dias úteis para contestar, 30 dias úteis para recorrer";
        assert_eq!(extract_deadline(text, today), Some(date(2026, 1, 6)));
    }

    #[test]
    fn test_deadline_out_of_range() {
        let today = date(2026, 1, 1);
        assert_eq!(extract_deadline("99999999999 dias úteis", today), None);
        assert_eq!(extract_deadline("999999999999999999999999 dias úteis", today), None);
        assert_eq!(extract_deadline("3000000 dias úteis", date(2026, 10, 19)), None);
    }

    #[test]
    fn test_deadline_upper_year_bound() {
        let today = date(9999, 12, 1);
        assert_eq!(extract_deadline("30 dias úteis", today), Some(date(9999, 12, 31)));
        assert_eq!(extract_deadline("31 dias úteis", today), None);
    }

    #[test]
    fn test_case_value_first_positive_amount() {
        assert_eq!(extract_case_value("R$ 1.234,56"), 1234.56);
        assert_eq!(extract_case_value("R$ 1.234,56 e depois R$ 1.234,56"), 1234.56);
        assert_eq!(extract_case_value("R$500,00 e R$ 10,00"), 500.0);
    }

    #[test]
    fn test_case_value_zero_then_positive_accumulates() {
        assert_eq!(extract_case_value("R$ 0,00 depois R$ 10,00 depois R$ 99,00"), 10.0);
        assert_eq!(extract_case_value("R$ 0,00"), 0.0);
    }

    #[test]
    fn test_case_value_escaped_marker() {
        assert_eq!(extract_case_value(r"indenização de R\$ 2.000,00"), 2000.0);
    }

    #[test]
    fn test_case_value_skips_unparsable() {
        assert_eq!(extract_case_value("R$ , ou R$ 3,50"), 3.5);
    }

    #[test]
    fn test_case_value_followed_by_comma() {
        assert_eq!(extract_case_value("R$ 10,00, mais nada"), 10.0);
        assert_eq!(
            extract_case_value("Requer R$ 5.000,00, a título de danos morais."),
            5000.0
        );
        assert_eq!(extract_case_value("R$ 0,00, depois R$ 7,50."), 7.5);
    }

    #[test]
    fn test_case_value_sentence_final_period() {
        assert_eq!(extract_case_value("no valor de R$ 1.500,00."), 1500.0);
    }

    #[test]
    fn test_classification_priority() {
        assert_eq!(
            classify_case("Danos morais e EXTRAVIO DE BAGAGENS"),
            CaseType::BaggageLoss
        );
        assert_eq!(
            classify_case("Houve atraso no voo\nPede danos morais"),
            CaseType::FlightDelay
        );
        assert_eq!(classify_case("Pede danos morais"), CaseType::MoralDamages);
        assert_eq!(classify_case("Cobrança indevida"), CaseType::Other);
    }

    #[test]
    fn test_flight_delay_requires_same_line() {
        assert_eq!(classify_case("O voo partiu\ncom atraso"), CaseType::Other);
        assert_eq!(classify_case("ATRASO de 5h do VOO 1234"), CaseType::FlightDelay);
        assert_eq!(classify_case("O voo partiu\rcom atraso"), CaseType::Other);
    }

    #[test]
    fn test_description_last_three_lines() {
        let text = "linha 1\nlinha 2\nlinha 3\nlinha 4\nlinha 5";
        assert_eq!(
            extract_description(text).as_deref(),
            Some("linha 3. linha 4. linha 5")
        );
    }

    #[test]
    fn test_description_short_and_trailing_newline() {
        assert_eq!(extract_description("única").as_deref(), Some("única"));
        assert_eq!(extract_description("a\nb\nc\n").as_deref(), Some("b. c."));
        assert_eq!(extract_description(""), None);
        assert_eq!(extract_description("  \t "), None);
        // Blank closing lines still contribute their separators.
        assert_eq!(extract_description("texto\n\n\n").as_deref(), Some(". ."));
    }
}
