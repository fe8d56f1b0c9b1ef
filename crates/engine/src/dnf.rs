use crate::model::{EventKey, Events};
use crate::normalize::Token;
use config::DnfDriverRule;

/// Compare a single predicted retiree against the official retirement list.
///
/// Predicting nobody matches a race without retirements and nothing else. A
/// named driver never matches an empty list. Otherwise the rule decides:
/// [`DnfDriverRule::Membership`] accepts the driver anywhere in the list,
/// [`DnfDriverRule::First`] only in first place.
pub fn match_dnf_driver(predicted: &Token, retired: &[Token], rule: DnfDriverRule) -> bool {
    match (predicted, retired) {
        (Token::Absent, []) => true,
        (Token::Absent, _) | (Token::Value(_), []) => false,
        (guess, _) => match rule {
            DnfDriverRule::Membership => retired.contains(guess),
            DnfDriverRule::First => retired.first() == Some(guess),
        },
    }
}

/// [`match_dnf_driver`] over the `DNF_DRIVER` entries of two event sets.
pub fn match_dnf(predicted: &Events, official: &Events, rule: DnfDriverRule) -> bool {
    match_dnf_driver(
        predicted.get(&EventKey::DnfDriver),
        &official.dnf_drivers(),
        rule,
    )
}
