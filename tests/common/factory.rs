use wechatterbot::models::{CreateRule, CreateStatement, Rule, Statement};
use wechatterbot::repositories::{RuleRepository, StatementRepository};
use wechatterbot::services::AuthService;
use wechatterbot::state::AppState;

use super::app::ADMIN_USERNAME;

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Token for the seeded admin account
    pub fn admin_token(&self) -> String {
        self.token_for(ADMIN_USERNAME)
    }

    /// Token issued for an arbitrary username
    pub fn token_for(&self, username: &str) -> String {
        AuthService::generate_token(username, 3600, &self.state.config).unwrap()
    }

    /// Create a rule directly in the database
    pub async fn create_rule(&self, text: &str, response: &str) -> Rule {
        let input = CreateRule {
            text: text.to_string(),
            response: response.to_string(),
        };

        RuleRepository::create(&self.state.db, &input).await.unwrap()
    }

    /// Learn a question/answer pair directly in the database
    pub async fn create_statements(&self, text: &str, response: &str) -> (Statement, Statement) {
        let input = CreateStatement {
            text: text.to_string(),
            response: response.to_string(),
        };

        StatementRepository::create_pair(&self.state.db, &input)
            .await
            .unwrap()
    }
}
