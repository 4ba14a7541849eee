use tracing::info;

/// Fields of the contact form, in tab order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Message,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First Name",
            FormField::LastName => "Last Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FirstName => "John",
            FormField::LastName => "Doe",
            FormField::Email => "john@example.com",
            FormField::Message => "Tell us about your project...",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, FormField::Message)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("email address looks invalid")]
    InvalidEmail,
}

/// Outcome of the last "Send Message" press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Sent,
    Rejected(FormError),
}

/// Local contact form state. Messages never leave the process.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
    status: Option<FormStatus>,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// Type `c` into `field`. Newlines are only kept by the message field.
    pub fn input(&mut self, field: FormField, c: char) {
        if c == '\n' && !field.is_multiline() {
            return;
        }
        if c.is_control() && c != '\n' {
            return;
        }
        self.value_mut(field).push(c);
        self.status = None;
    }

    pub fn backspace(&mut self, field: FormField) {
        self.value_mut(field).pop();
        self.status = None;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                return Err(FormError::Missing(field.label()));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and, when valid, clear the form.
    pub fn submit(&mut self) -> Result<(), FormError> {
        match self.validate() {
            Ok(()) => {
                info!(chars = self.message.chars().count(), "contact form accepted");
                *self = ContactForm {
                    status: Some(FormStatus::Sent),
                    ..ContactForm::default()
                };
                Ok(())
            }
            Err(e) => {
                self.status = Some(FormStatus::Rejected(e.clone()));
                Err(e)
            }
        }
    }
}

/// `local@domain.tld` with non-empty parts and no whitespace.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
