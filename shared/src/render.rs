//! HTML body of the RSVP confirmation email.
//!
//! Submitted values are interpolated as-is, without HTML escaping.

use crate::models::field_text;
use crate::RsvpSubmission;

/// Render the confirmation email for a submission, signed by `sender_name`.
pub fn confirmation_html(rsvp: &RsvpSubmission, sender_name: &str) -> String {
    let comments = rsvp
        .comments()
        .map(|c| format!("<p><strong>Comments:</strong> {}</p>", c))
        .unwrap_or_default();

    format!(
        r#"
      <html><body style="font-family: Arial, sans-serif;">
        <h2>Thank You for your RSVP, {name}!</h2>
        <p>Here is a summary:</p>
        <div>
          <p><strong>Total Guests:</strong> {guests}</p>
          <p><strong>Non-Veg Meals:</strong> {non_veg}</p>
          <p><strong>Veg Meals:</strong> {veg}</p>
          {comments}
        </div>
        <p>With love,<br>{sender}</p>
      </body></html>
    "#,
        name = field_text(&rsvp.name),
        guests = field_text(&rsvp.guest_count),
        non_veg = field_text(&rsvp.non_veg),
        veg = field_text(&rsvp.veg),
        comments = comments,
        sender = sender_name,
    )
}
