//! User-facing texts: menu, wizard prompts, results and error messages.

use cpl_calc::{CalcError, CplResult, WizardStep};

pub const MENU_TEXT: &str = "CPL calculator.\n\
\n\
One line: /cpl <payout> <approve %> [trash %] [roi %]\n\
Example: /cpl 20 35 30 50\n\
\n\
Or press the button below (or send /wizard) to enter the numbers one by one.\n\
Decimals may use a dot or a comma.";

pub const NOT_A_NUMBER: &str = "Please send a number, e.g. 35 or 35,5.";

/// Prompt for the value the wizard waits for.
pub fn prompt(step: WizardStep) -> &'static str {
    match step {
        WizardStep::AwaitingPayout => "Step 1/4. Payout per approved lead (e.g. 20):",
        WizardStep::AwaitingApprove => "Step 2/4. Approval rate, % (e.g. 35):",
        WizardStep::AwaitingTrash => "Step 3/4. Trash rate, % (0 if none):",
        WizardStep::AwaitingRoi => "Step 4/4. Desired ROI, % (0 for breakeven only):",
    }
}

pub fn format_result(result: &CplResult) -> String {
    format!(
        "Breakeven CPL: {}\nCPL for target ROI: {}",
        result.breakeven, result.lead_price
    )
}

pub fn format_error(err: &CalcError) -> String {
    match err {
        CalcError::InsufficientArguments { required, got } => format!(
            "Need at least {} numbers, got {}.\nUsage: /cpl <payout> <approve %> [trash %] [roi %]\nExample: /cpl 20 35 30 50",
            required, got
        ),
        CalcError::NonNumericArgument(token) if token.is_empty() => NOT_A_NUMBER.to_string(),
        CalcError::NonNumericArgument(token) => {
            format!("\"{}\" is not a number. {}", token, NOT_A_NUMBER)
        }
        CalcError::InvalidSessionState => {
            "Session state is invalid, please restart with /wizard.".to_string()
        }
        CalcError::DegenerateInput => {
            "These inputs give no finite price (trash rate or ROI of -100%). Check the numbers and try again."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_shows_both_prices() {
        let text = format_result(&CplResult {
            breakeven: 5.3846,
            lead_price: 3.5897,
        });
        assert!(text.contains("5.3846"));
        assert!(text.contains("3.5897"));
    }

    #[test]
    fn insufficient_arguments_names_the_minimum() {
        let text = format_error(&CalcError::InsufficientArguments { required: 3, got: 2 });
        assert!(text.contains("at least 3"));
    }

    #[test]
    fn non_numeric_quotes_the_token() {
        let text = format_error(&CalcError::NonNumericArgument("abc".to_string()));
        assert!(text.contains("\"abc\""));
        assert!(text.contains(NOT_A_NUMBER));
        assert_eq!(
            format_error(&CalcError::NonNumericArgument(String::new())),
            NOT_A_NUMBER
        );
    }

    #[test]
    fn every_step_has_a_distinct_prompt() {
        let prompts: Vec<_> = WizardStep::SEQUENCE.iter().map(|s| prompt(*s)).collect();
        for (i, p) in prompts.iter().enumerate() {
            assert!(p.starts_with(&format!("Step {}/4", i + 1)));
        }
    }
}
