//! Product selection forwarded to the server on send.

/// Prompt shown when the user sends without choosing a product
pub const CHOOSE_PRODUCT_PROMPT: &str = "Seleccionar un producto primero";

/// A non-empty product identifier read from the selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(String);

impl Selection {
    /// Accept any non-empty value, unmodified
    pub fn parse(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// What a send action results in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendDecision {
    /// Transmit this exact string over the channel
    Transmit(String),
    /// Show a blocking prompt; nothing is transmitted
    Prompt(&'static str),
}

impl SendDecision {
    pub fn for_value(value: &str) -> Self {
        match Selection::parse(value) {
            Some(selection) => SendDecision::Transmit(selection.into_inner()),
            None => SendDecision::Prompt(CHOOSE_PRODUCT_PROMPT),
        }
    }

    pub fn is_transmit(&self) -> bool {
        matches!(self, SendDecision::Transmit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_value_is_transmitted_verbatim() {
        assert_eq!(
            SendDecision::for_value("Product A"),
            SendDecision::Transmit("Product A".to_string())
        );
        // Whitespace is not trimmed
        assert_eq!(
            SendDecision::for_value(" Product A "),
            SendDecision::Transmit(" Product A ".to_string())
        );
    }

    #[test]
    fn test_prompt_text() {
        // Shared with the dashboard; keep both copies identical
        assert_eq!(CHOOSE_PRODUCT_PROMPT, "Seleccionar un producto primero");
    }

    #[test]
    fn test_empty_value_prompts() {
        let decision = SendDecision::for_value("");
        assert_eq!(decision, SendDecision::Prompt(CHOOSE_PRODUCT_PROMPT));
        assert!(!decision.is_transmit());
    }

    #[test]
    fn test_selection_parse() {
        assert!(Selection::parse("").is_none());
        assert_eq!(Selection::parse("Milk").unwrap().as_str(), "Milk");
    }
}
