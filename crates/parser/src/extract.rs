use chatreplay_core::ParseError;
use serde_json::Value;

const REPLAY_ACTIONS: &str = "/replayChatItemAction/actions";
const CONTINUATION_ACTIONS: &str = "/continuationContents/liveChatContinuation/actions";

/// Flatten per-item action containers into one ordered action sequence.
///
/// Each top-level item carries actions at one of two locations; the replay
/// wrapper wins when both are present. Items with neither contribute zero
/// actions. Relative order is preserved across and within items.
pub fn extract_actions(items: Vec<Value>) -> Result<Vec<Value>, ParseError> {
    let mut actions = Vec::new();
    for mut item in items {
        match take_action_list(&mut item) {
            None => {}
            Some(Value::Array(list)) => actions.extend(list),
            Some(_) => {
                return Err(ParseError::InternalShape {
                    context: "action list",
                });
            }
        }
    }
    Ok(actions)
}

fn take_action_list(item: &mut Value) -> Option<Value> {
    if let Some(list) = item.pointer_mut(REPLAY_ACTIONS) {
        return Some(list.take());
    }
    item.pointer_mut(CONTINUATION_ACTIONS).map(Value::take)
}
