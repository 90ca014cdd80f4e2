use crate::libs::app::App;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_error;
use anyhow::Result;

pub async fn cmd(app: &App) -> Result<()> {
    match app.use_cases.get_quote.execute().await {
        Ok(quote) => {
            View::quote(&quote);
            Ok(())
        }
        Err(e) => {
            msg_error!(Message::QuoteUnavailable);
            Err(e)
        }
    }
}
