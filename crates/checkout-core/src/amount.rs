//! Amount Selection
//!
//! The state machine that turns user interaction - preset clicks, custom
//! typing, interval changes, page-level overrides - into a single
//! authoritative contribution amount. State is explicit and transitions are
//! pure, so the whole machine is testable without a rendering environment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::interval::ContributionInterval;
use crate::page::AmountOptions;

/// Which entry mode currently owns the amount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selected {
    /// Nothing chosen yet
    None,
    /// Preset option at this index in the active list
    Preset(usize),
    /// Free-typed custom amount
    Custom,
}

/// Amount-selection state for one checkout form.
///
/// Invariants held across every transition:
///
/// - non-empty custom text always wins over presets, even when the typed
///   value coincides with a preset value;
/// - the resolved amount is `None` exactly when no valid selection exists;
/// - custom text is re-derived from the sanitized input, never stored raw;
/// - changing interval clears the custom entry unless the page forces an
///   override amount.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AmountSelection {
    interval: ContributionInterval,
    options: AmountOptions,
    selected: Selected,
    custom_text: String,
    resolved: Option<Decimal>,
    override_amount: Option<Decimal>,
}

impl AmountSelection {
    pub fn new(interval: ContributionInterval, options: AmountOptions) -> Self {
        Self {
            interval,
            options,
            selected: Selected::None,
            custom_text: String::new(),
            resolved: None,
            override_amount: None,
        }
    }

    /// Seed from a page-level override amount.
    ///
    /// The custom field is always shown, pre-filled with the forced amount,
    /// and the amount survives interval changes.
    pub fn with_override(
        interval: ContributionInterval,
        options: AmountOptions,
        amount: Decimal,
    ) -> Self {
        let mut state = Self::new(interval, options);
        state.override_amount = Some(amount);
        state.custom_text = amount.normalize().to_string();
        state.selected = Selected::Custom;
        state.resolved = Some(amount);
        state
    }

    pub fn interval(&self) -> ContributionInterval {
        self.interval
    }

    /// Entry mode currently owning the amount
    pub fn selected(&self) -> Selected {
        self.selected
    }

    /// Sanitized text currently shown in the custom field
    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    /// The authoritative amount; `None` means no valid selection exists
    pub fn resolved_amount(&self) -> Option<Decimal> {
        self.resolved
    }

    /// Whether the page forces the custom field to be shown
    pub fn custom_field_forced(&self) -> bool {
        self.override_amount.is_some()
    }

    /// Preset list active for the current interval
    pub fn active_options(&self) -> &[Decimal] {
        self.options.for_interval(self.interval)
    }

    /// Select a preset by index in the active option list.
    ///
    /// Clears the custom field; an out-of-range index clears the selection.
    pub fn select_preset(&mut self, index: usize) -> Option<Decimal> {
        self.custom_text.clear();
        match self.active_options().get(index).copied() {
            Some(value) => {
                self.selected = Selected::Preset(index);
                self.resolved = Some(value);
            }
            None => {
                self.selected = Selected::None;
                self.resolved = None;
            }
        }
        tracing::debug!(index, resolved = ?self.resolved, "preset selected");
        self.resolved
    }

    /// Apply raw custom-field input.
    ///
    /// The input is sanitized to digits and a single decimal point with at
    /// most two fraction digits, and the sanitized text is echoed back to
    /// the field even when it does not parse - partial entry stays visible.
    /// The return value is the new authoritative amount; `None` is an
    /// explicit unset, not an omission.
    pub fn enter_custom_text(&mut self, raw: &str) -> Option<Decimal> {
        let text = sanitize_amount_input(raw);
        if text.is_empty() {
            self.custom_text.clear();
            self.selected = Selected::None;
            self.resolved = None;
            return None;
        }
        self.resolved = parse_amount(&text);
        self.custom_text = text;
        self.selected = Selected::Custom;
        self.resolved
    }

    /// Focusing the custom field re-applies its current text, making the
    /// typed value authoritative even before it is committed. Deliberate:
    /// focus is implicit selection of custom mode.
    pub fn focus_custom_field(&mut self) -> Option<Decimal> {
        let text = self.custom_text.clone();
        self.enter_custom_text(&text)
    }

    /// Change the active interval.
    ///
    /// Without an override the custom entry is cleared and a still-in-range
    /// preset index re-resolves against the new interval's option list; the
    /// amount value itself never carries over. With an override the forced
    /// amount persists untouched.
    pub fn change_interval(&mut self, interval: ContributionInterval) -> Option<Decimal> {
        if interval == self.interval {
            return self.resolved;
        }
        self.interval = interval;

        if self.override_amount.is_some() {
            return self.resolved;
        }

        self.custom_text.clear();
        let value = match self.selected {
            Selected::Preset(index) => self.active_options().get(index).copied(),
            _ => None,
        };
        match value {
            Some(value) => self.resolved = Some(value),
            None => {
                self.selected = Selected::None;
                self.resolved = None;
            }
        }
        tracing::debug!(interval = %interval, resolved = ?self.resolved, "interval changed");
        self.resolved
    }

    /// Preset index to highlight, derived from state.
    ///
    /// A preset is "selected" only when the custom field is empty and its
    /// value equals the resolved amount. Non-empty custom text reports no
    /// selected preset even on numeric coincidence.
    pub fn selected_preset(&self) -> Option<usize> {
        if !self.custom_text.is_empty() {
            return None;
        }
        let resolved = self.resolved?;
        self.active_options().iter().position(|v| *v == resolved)
    }
}

/// Keep digits and a single decimal point, with at most two fraction digits.
pub fn sanitize_amount_input(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    let mut fraction_digits = 0;
    for c in raw.chars() {
        match c {
            '0'..='9' => {
                if seen_point {
                    if fraction_digits == 2 {
                        continue;
                    }
                    fraction_digits += 1;
                }
                out.push(c);
            }
            '.' if !seen_point => {
                seen_point = true;
                out.push('.');
            }
            _ => {}
        }
    }
    out
}

/// Parse sanitized text to a positive amount. Partial entries like "12." or
/// ".5" parse the way a contributor mid-typing expects; zero and bare "."
/// resolve to nothing.
fn parse_amount(text: &str) -> Option<Decimal> {
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    if trimmed.is_empty() {
        return None;
    }
    let candidate = if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    };
    candidate
        .parse::<Decimal>()
        .ok()
        .filter(|v| *v > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn options() -> AmountOptions {
        AmountOptions {
            one_time: vec![dec!(1), dec!(2), dec!(3)],
            month: vec![dec!(10), dec!(20)],
            year: vec![],
        }
    }

    fn selection() -> AmountSelection {
        AmountSelection::new(ContributionInterval::OneTime, options())
    }

    #[test]
    fn test_preset_click_resolves_and_highlights() {
        let mut state = selection();
        assert_eq!(state.select_preset(1), Some(dec!(2)));
        assert_eq!(state.custom_text(), "");
        assert_eq!(state.selected_preset(), Some(1));
    }

    #[test]
    fn test_out_of_range_preset_clears_selection() {
        let mut state = selection();
        state.select_preset(1);
        assert_eq!(state.select_preset(7), None);
        assert_eq!(state.resolved_amount(), None);
        assert_eq!(state.selected_preset(), None);
    }

    #[test]
    fn test_custom_text_wins_over_matching_preset() {
        let mut state = selection();
        assert_eq!(state.enter_custom_text("1"), Some(dec!(1)));
        // Value coincides with preset index 0, but custom entry wins.
        assert_eq!(state.selected_preset(), None);
    }

    #[test]
    fn test_clearing_custom_text_unsets_amount() {
        let mut state = selection();
        state.enter_custom_text("42");
        assert_eq!(state.enter_custom_text(""), None);
        assert_eq!(state.resolved_amount(), None);
        assert_eq!(state.custom_text(), "");
    }

    #[test]
    fn test_invalid_remainder_is_echoed_but_unresolved() {
        let mut state = selection();
        assert_eq!(state.enter_custom_text("0"), None);
        assert_eq!(state.custom_text(), "0");
        assert_eq!(state.enter_custom_text("."), None);
        assert_eq!(state.custom_text(), ".");
        assert_eq!(state.selected_preset(), None);
    }

    #[test]
    fn test_sanitize_strips_junk_and_extra_precision() {
        assert_eq!(sanitize_amount_input("$1,234.567"), "1234.56");
        assert_eq!(sanitize_amount_input("12.3.4"), "12.34");
        assert_eq!(sanitize_amount_input("abc"), "");
        assert_eq!(sanitize_amount_input("9"), "9");
    }

    #[test]
    fn test_partial_entries_parse_like_mid_typing() {
        let mut state = selection();
        assert_eq!(state.enter_custom_text("12."), Some(dec!(12)));
        assert_eq!(state.custom_text(), "12.");
        assert_eq!(state.enter_custom_text(".5"), Some(dec!(0.5)));
    }

    #[test]
    fn test_focus_reapplies_current_text() {
        let mut state = selection();
        state.select_preset(0);
        // Field is empty; focusing it clears the preset selection.
        assert_eq!(state.focus_custom_field(), None);
        assert_eq!(state.selected_preset(), None);

        state.enter_custom_text("5");
        state.focus_custom_field();
        assert_eq!(state.resolved_amount(), Some(dec!(5)));
    }

    #[test]
    fn test_interval_change_clears_custom_entry() {
        let mut state = selection();
        state.enter_custom_text("42");
        assert_eq!(state.change_interval(ContributionInterval::Monthly), None);
        assert_eq!(state.custom_text(), "");
        assert_eq!(state.resolved_amount(), None);
    }

    #[test]
    fn test_interval_change_rebinds_preset_index() {
        let mut state = selection();
        state.select_preset(1);
        // Index 1 exists for monthly too; it re-resolves to the new list.
        assert_eq!(
            state.change_interval(ContributionInterval::Monthly),
            Some(dec!(20))
        );
        assert_eq!(state.selected_preset(), Some(1));
        // Yearly has no presets; the selection clears.
        assert_eq!(state.change_interval(ContributionInterval::Yearly), None);
        assert_eq!(state.selected_preset(), None);
    }

    #[test]
    fn test_same_interval_is_a_no_op() {
        let mut state = selection();
        state.enter_custom_text("42");
        assert_eq!(
            state.change_interval(ContributionInterval::OneTime),
            Some(dec!(42))
        );
        assert_eq!(state.custom_text(), "42");
    }

    #[test]
    fn test_override_persists_across_interval_changes() {
        let mut state = AmountSelection::with_override(
            ContributionInterval::OneTime,
            options(),
            dec!(50),
        );
        assert!(state.custom_field_forced());
        assert_eq!(state.custom_text(), "50");
        assert_eq!(state.resolved_amount(), Some(dec!(50)));

        assert_eq!(
            state.change_interval(ContributionInterval::Monthly),
            Some(dec!(50))
        );
        assert_eq!(state.custom_text(), "50");
    }
}
