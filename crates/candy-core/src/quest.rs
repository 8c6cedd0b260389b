//! Candy quest
//!
//! Picking the house brand gets the flattering answer, anything else gets
//! the rescue pitch.

use crate::catalog::{
    QuestOption, QuestResponse, DISCERNING_RESPONSE, QUEST_OPTIONS, RESCUE_RESPONSE,
    WINNING_OPTION,
};
use crate::error::{CandyError, Result};

/// Canned response for a known option id
pub fn response_for(option: &QuestOption) -> &'static QuestResponse {
    if option.id == WINNING_OPTION {
        &DISCERNING_RESPONSE
    } else {
        &RESCUE_RESPONSE
    }
}

/// Quest state: the recorded choice, if any
#[derive(Debug, Default, Clone)]
pub struct Quest {
    choice: Option<&'static QuestOption>,
}

impl Quest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [QuestOption] {
        &QUEST_OPTIONS
    }

    /// Record a choice by option id
    pub fn choose(&mut self, id: &str) -> Result<&'static QuestResponse> {
        let option = QUEST_OPTIONS
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| CandyError::UnknownOption(id.to_string()))?;

        self.choice = Some(option);
        tracing::info!(option = option.id, "Quest answered");
        Ok(response_for(option))
    }

    /// Record a choice by position in the option list
    pub fn choose_index(&mut self, index: usize) -> Result<&'static QuestResponse> {
        let option = QUEST_OPTIONS.get(index).ok_or(CandyError::OutOfRange {
            index,
            len: QUEST_OPTIONS.len(),
        })?;
        self.choose(option.id)
    }

    pub fn choice(&self) -> Option<&'static QuestOption> {
        self.choice
    }

    pub fn is_chosen(&self, id: &str) -> bool {
        self.choice.is_some_and(|c| c.id == id)
    }

    /// Response for the current choice; `None` until something is picked
    pub fn response(&self) -> Option<&'static QuestResponse> {
        self.choice.map(response_for)
    }

    pub fn reset(&mut self) {
        self.choice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_response_before_choice() {
        let quest = Quest::new();
        assert!(quest.response().is_none());
        assert!(quest.choice().is_none());
    }

    #[test]
    fn test_house_brand_gets_discerning_answer() {
        let mut quest = Quest::new();
        let response = quest.choose("candy-heaven").unwrap();
        assert_eq!(response.title, "Ah, a discerning sweet soul!");
        assert_eq!(response.menu[0], "Galactic Swizzle Sticks");
        assert!(quest.is_chosen("candy-heaven"));
    }

    #[test]
    fn test_other_options_get_rescue_answer() {
        let mut quest = Quest::new();
        for id in ["option-a", "option-b"] {
            let response = quest.choose(id).unwrap();
            assert_eq!(response.title, "Clearly, your taste buds need rescuing!");
            assert_eq!(response.menu.len(), 4);
        }
        assert_eq!(quest.response(), Some(&RESCUE_RESPONSE));
    }

    #[test]
    fn test_unknown_option_keeps_state() {
        let mut quest = Quest::new();
        quest.choose("option-a").unwrap();

        let err = quest.choose("mystery-box").unwrap_err();
        assert!(matches!(err, CandyError::UnknownOption(ref id) if id == "mystery-box"));
        assert!(quest.is_chosen("option-a"));
    }

    #[test]
    fn test_choose_by_index_and_reset() {
        let mut quest = Quest::new();
        assert_eq!(quest.choose_index(2).unwrap(), &DISCERNING_RESPONSE);
        assert!(quest.choose_index(3).is_err());

        quest.reset();
        assert!(quest.response().is_none());
    }
}
