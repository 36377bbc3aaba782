//! Login page messages

#[derive(Debug, Clone)]
pub enum LoginMessage {
    Input(char),
    Backspace,
    /// Request the OTP, or verify the typed code.
    Submit,
    /// Ask for another OTP once the cooldown is over.
    Resend,
    /// Switch between the admin and member login.
    SwitchRealm,
    /// Back to the phone step, or quit from the phone step.
    Back,
}
