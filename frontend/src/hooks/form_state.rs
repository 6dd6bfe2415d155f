use yew::prelude::*;

/// At most one banner is shown above a form: an error or a success note.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormMessage {
    #[default]
    None,
    Error(String),
    Success(String),
}

#[derive(Clone)]
pub struct FormState {
    pub message: FormMessage,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub clear: Callback<()>,
}

impl FormState {
    pub fn error(&self) -> Option<&str> {
        match &self.message {
            FormMessage::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn success(&self) -> Option<&str> {
        match &self.message {
            FormMessage::Success(msg) => Some(msg),
            _ => None,
        }
    }
}

#[hook]
pub fn use_form_state() -> FormState {
    let message = use_state_eq(FormMessage::default);

    let handle_success = {
        let message = message.clone();
        Callback::from(move |msg: String| message.set(FormMessage::Success(msg)))
    };

    let handle_error = {
        let message = message.clone();
        Callback::from(move |msg: String| message.set(FormMessage::Error(msg)))
    };

    let clear = {
        let message = message.clone();
        Callback::from(move |_: ()| message.set(FormMessage::None))
    };

    FormState {
        message: (*message).clone(),
        handle_success,
        handle_error,
        clear,
    }
}
