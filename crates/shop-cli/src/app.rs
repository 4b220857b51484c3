use crate::{
    ANSWER_FAILED_MESSAGE, CartCommands, CliError, CliResult, Commands, HomeCommands,
    NotificationCommands, Notifier, ProfileCommands, QUESTION_FAILED_MESSAGE, QuestionCommands,
    notify_on_failure, questions_or_empty,
};

use shop_client::{Client, ProfileUpdate, Registration};
use shop_config::Config;
use shop_session::{FileSessionStorage, PersistOnChange, SessionStorage, SessionStore, UserSession};

use log::info;
use serde_json::{Value, json};

/// One `shop` invocation: a session store over the API client, persisted to disk.
pub struct App<N> {
    store: SessionStore<Client>,
    notifier: N,
}

impl<N: Notifier> App<N> {
    /// Build from configuration, rehydrating the stored session.
    pub fn from_config(config: &Config, notifier: N) -> CliResult<Self> {
        let storage = FileSessionStorage::new(config.session_dir()?, &config.session.storage_key);
        Self::new(&config.api.base_url, storage, notifier)
    }

    pub fn new<S>(base_url: &str, storage: S, notifier: N) -> CliResult<Self>
    where
        S: SessionStorage + 'static,
    {
        let client = Client::new(base_url, None);

        let mut store = SessionStore::restore(client, &storage, |corrupted| {
            notifier.warn(&format!(
                "Stored session was unreadable and has been reset ({})",
                corrupted.reason
            ));
            if let Some(e) = &corrupted.discard_error {
                notifier.warn(&format!(
                    "Could not back up the unreadable session: {e}. {}",
                    e.recovery_hint()
                ));
            }
        })?;

        let access = store.session().access.clone();
        store.api_mut().set_access_token(access.as_deref());
        store.subscribe(PersistOnChange::new(storage));

        Ok(Self { store, notifier })
    }

    pub fn session(&self) -> &UserSession {
        self.store.session()
    }

    /// Run one command and return what should be printed.
    pub async fn execute(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { username, password } => {
                let session = self.store.login(&username, &password).await?;
                self.store
                    .api_mut()
                    .set_access_token(session.access.as_deref());
                Ok(serde_json::to_value(&session.profile)?)
            }

            Commands::Logout => {
                self.store.logout();
                self.store.api_mut().set_access_token(None);
                Ok(json!({ "logged_out": true }))
            }

            Commands::Register {
                username,
                email,
                first_name,
                last_name,
                password,
                confirm_password,
            } => {
                let registration = Registration {
                    username,
                    email,
                    first_name,
                    last_name,
                    password,
                    confirm_password,
                };
                let registered = self.store.register(&registration).await?;
                info!("Account created; run `shop login` to sign in");
                Ok(serde_json::to_value(&registered.profile)?)
            }

            Commands::Whoami => {
                if !self.session().is_authenticated() {
                    return Err(CliError::not_logged_in("run `shop login` first"));
                }
                Ok(serde_json::to_value(&self.session().profile)?)
            }

            Commands::SetToken { token } => {
                self.store.api_mut().set_access_token(Some(&token));
                self.store.set_access_token(token);
                Ok(json!({ "access_token_replaced": true }))
            }

            Commands::Profile { action } => match action {
                ProfileCommands::Update {
                    id,
                    username,
                    email,
                    phone,
                    picture,
                } => {
                    let update = ProfileUpdate {
                        id: self.user_id(id)?,
                        username,
                        email,
                        phone,
                        profile: picture,
                    };
                    Ok(self.client().update_profile(&update).await?)
                }
            },

            Commands::Cart { action } => match action {
                CartCommands::Get => Ok(self.client().get_cart().await?),
                CartCommands::Save { data } => {
                    let cart: Value = serde_json::from_str(&data).map_err(|e| {
                        CliError::invalid_input(format!("cart data is not valid JSON: {e}"))
                    })?;
                    Ok(self.client().save_cart(&cart).await?)
                }
                CartCommands::Add { user_id } => {
                    let user_id = self.user_id(user_id)?;
                    Ok(self.client().add_cart(user_id).await?)
                }
            },

            Commands::Home { action } => match action {
                HomeCommands::New => Ok(self.client().new_arrivals().await?),
                HomeCommands::Hot => Ok(self.client().hot_products().await?),
                HomeCommands::Products => Ok(self.client().home_products().await?),
                HomeCommands::Banner => Ok(self.client().home_banner().await?),
                HomeCommands::Messages { user_id } => {
                    let user_id = self.user_id(user_id)?;
                    Ok(self.client().message_count(user_id).await?)
                }
            },

            Commands::Notifications { action } => match action {
                NotificationCommands::List { user_id } => {
                    let user_id = self.user_id(user_id)?;
                    Ok(self.client().notifications(user_id).await?)
                }
                NotificationCommands::MarkRead { user_id } => {
                    let user_id = self.user_id(user_id)?;
                    Ok(self.client().mark_notifications_read(user_id).await?)
                }
            },

            Commands::Question { action } => match action {
                QuestionCommands::List { product_id } => {
                    let result = self.client().product_questions(&product_id).await;
                    Ok(Value::Array(questions_or_empty(result)))
                }
                QuestionCommands::Ask {
                    product_id,
                    content,
                } => {
                    let result = self.client().submit_question(&product_id, &content).await;
                    Ok(notify_on_failure(
                        result,
                        &self.notifier,
                        QUESTION_FAILED_MESSAGE,
                    )?)
                }
                QuestionCommands::Answer {
                    question_id,
                    content,
                } => {
                    let result = self.client().submit_answer(&question_id, &content).await;
                    Ok(notify_on_failure(result, &self.notifier, ANSWER_FAILED_MESSAGE)?)
                }
            },
        }
    }

    fn client(&self) -> &Client {
        self.store.api()
    }

    /// Explicit id, else the signed-in user's.
    fn user_id(&self, explicit: Option<i64>) -> CliResult<i64> {
        if let Some(id) = explicit {
            return Ok(id);
        }

        let id = self
            .session()
            .profile
            .id
            .as_ref()
            .ok_or_else(|| CliError::not_logged_in("pass --user-id or run `shop login` first"))?;

        id.as_i64().ok_or_else(|| {
            CliError::invalid_input(format!(
                "signed-in user id '{id}' is not numeric; pass --user-id"
            ))
        })
    }
}
