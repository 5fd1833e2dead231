use std::io::{self, Write};

use maxtemp_core::{FormController, FormState, PredictionClient};

pub const NO_RESULT: &str = "No result.";

/// Submit the form, writing the loading label to `indicator` while the
/// request is pending, then the result card to `out`.
pub async fn submit_and_render<C, O, I>(
    controller: &FormController<C>,
    out: &mut O,
    indicator: &mut I,
) -> io::Result<()>
where
    C: PredictionClient,
    O: Write,
    I: Write,
{
    let mut updates = controller.subscribe();
    let submit = controller.submit();
    tokio::pin!(submit);

    let mut shown_loading = false;
    loop {
        // State changes are drained before the submission is polled again,
        // so a pending request always gets its label.
        tokio::select! {
            biased;

            changed = updates.changed() => {
                if changed.is_err() {
                    let _ = submit.as_mut().await;
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if state.loading && !shown_loading {
                    writeln!(indicator, "{}", state.button_label())?;
                    indicator.flush()?;
                    shown_loading = true;
                }
            }
            _ = &mut submit => break,
        }
    }

    writeln!(out, "{}", result_line(&controller.state()))?;
    Ok(())
}

pub fn result_line(state: &FormState) -> String {
    state.result_card().unwrap_or_else(|| NO_RESULT.to_string())
}
