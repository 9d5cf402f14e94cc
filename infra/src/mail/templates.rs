//! HTML bodies for OTP mails
//!
//! Templates carry `{{key}}` placeholders filled from the mail data object.

use bz_core::services::OtpTemplate;

fn source(template: OtpTemplate) -> &'static str {
    match template {
        OtpTemplate::UserActivationMail => include_str!("../../templates/user-activation-mail.html"),
        OtpTemplate::SellerActivationMail => include_str!("../../templates/seller-activation-mail.html"),
        OtpTemplate::ForgotPasswordUserMail => include_str!("../../templates/forgot-password-user-mail.html"),
        OtpTemplate::ForgotPasswordSellerMail => {
            include_str!("../../templates/forgot-password-seller-mail.html")
        }
    }
}

/// Render `template`, replacing each `{{key}}` with the escaped value of `data[key]`
///
/// Non-string scalars are written as JSON. Unknown placeholders are left as is.
pub fn render(template: OtpTemplate, data: &serde_json::Value) -> String {
    let mut body = source(template).to_string();

    if let Some(fields) = data.as_object() {
        for (key, value) in fields {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            body = body.replace(&format!("{{{{{}}}}}", key), &escape_html(&text));
        }
    }
    body
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_fills_placeholders() {
        let body = render(
            OtpTemplate::UserActivationMail,
            &json!({ "name": "Asha", "otp": "4821" }),
        );
        assert!(body.contains("Hi Asha,"));
        assert!(body.contains("4821"));
        assert!(!body.contains("{{"));
    }

    #[test]
    fn test_render_escapes_markup() {
        let body = render(
            OtpTemplate::ForgotPasswordSellerMail,
            &json!({ "name": "<script>x</script>", "otp": "1000" }),
        );
        assert!(body.contains("&lt;script&gt;"));
        assert!(!body.contains("<script>"));
    }

    #[test]
    fn test_every_template_has_code_slot() {
        for template in [
            OtpTemplate::UserActivationMail,
            OtpTemplate::SellerActivationMail,
            OtpTemplate::ForgotPasswordUserMail,
            OtpTemplate::ForgotPasswordSellerMail,
        ] {
            assert!(source(template).contains("{{otp}}"), "{} lacks otp slot", template);
        }
    }
}
