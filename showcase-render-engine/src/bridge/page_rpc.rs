//! JSON messaging with the hosting page.
//!
//! The page talks JSON-RPC 2.0 over `window.postMessage`: requests come in
//! through a message listener, responses and one-way notifications go back
//! out to the parent window once per frame.

use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use constants::sections::SECTION_COUNT;

use crate::engine::systems::fps_tracking::smoothed_fps;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id: Some(id),
        }
    }

    fn failure(id: serde_json::Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }
    }
}

/// One-way message to the page; carries no id and expects no answer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Outbound half of the bridge. Systems queue notifications and responses
/// here; everything queued is flushed to the parent window at the end of the
/// frame.
#[derive(Resource, Default)]
pub struct PageBridge {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl PageBridge {
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

pub struct PageBridgePlugin;

impl Plugin for PageBridgePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageBridge>()
            .add_event::<IncomingPageMessage>()
            .add_systems(
                Update,
                (
                    drain_message_queue,
                    answer_page_requests,
                    flush_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_page_message_listener);
    }
}

/// Queue filled by the `message` listener outside the Bevy tick.
#[derive(Resource)]
struct PageMessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingPageMessage {
    content: String,
}

#[cfg(target_arch = "wasm32")]
fn setup_page_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        let Ok(data) = event.data().dyn_into::<js_sys::JsString>() else {
            return;
        };
        let message: String = data.into();

        // Cheap shape check before queuing; full parsing happens on the
        // Bevy side of the fence.
        if message.contains("jsonrpc") {
            if let Ok(mut queue) = queue_clone.lock() {
                queue.push(message);
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("failed to register message listener");
    }

    // Ownership moves to JS for the page lifetime.
    closure.forget();
    commands.insert_resource(PageMessageQueue(message_queue));
}

fn drain_message_queue(
    message_queue: Option<Res<PageMessageQueue>>,
    mut message_events: EventWriter<IncomingPageMessage>,
) {
    let Some(queue) = message_queue else {
        return;
    };
    let Ok(mut queue) = queue.0.lock() else {
        return;
    };
    for content in queue.drain(..) {
        message_events.write(IncomingPageMessage { content });
    }
}

fn answer_page_requests(
    mut events: EventReader<IncomingPageMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut bridge: ResMut<PageBridge>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("dropping malformed page message: {parse_error}");
                continue;
            }
        };
        if let Some(response) = handle_rpc_request(&request, &diagnostics) {
            bridge.queue_response(response);
        }
    }
}

/// Dispatch one request to its handler. Requests without an id are
/// notifications and get no response.
fn handle_rpc_request(request: &RpcRequest, diagnostics: &DiagnosticsStore) -> Option<RpcResponse> {
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "scroll_to_section" => handle_scroll_to_section(&request.params),
        "get_fps" => handle_get_fps(diagnostics),
        unknown => {
            warn!("unknown page request method: {unknown}");
            Err(RpcError::method_not_found(unknown))
        }
    };

    Some(match result {
        Ok(value) => RpcResponse::success(id, value),
        Err(error) => RpcResponse::failure(id, error),
    })
}

/// Answer a progress-dot click: smooth-scroll the page to the requested
/// section's slot in the scroll range.
fn handle_scroll_to_section(params: &serde_json::Value) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct ScrollToSectionParams {
        index: usize,
    }

    let section = serde_json::from_value::<ScrollToSectionParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'index' parameter"))?;

    if section.index >= SECTION_COUNT {
        return Err(RpcError::invalid_params(&format!(
            "Section index out of range: {}",
            section.index
        )));
    }

    let target_y = scroll_page_to_section(section.index)?;

    Ok(serde_json::json!({
        "success": true,
        "target_y": target_y
    }))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn scroll_page_to_section(index: usize) -> Result<f64, RpcError> {
    let window = window().ok_or_else(|| RpcError::internal_error("window unavailable"))?;
    let body = window
        .document()
        .and_then(|d| d.body())
        .ok_or_else(|| RpcError::internal_error("document body unavailable"))?;
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| RpcError::internal_error("viewport height unavailable"))?;

    let max_scroll = body.scroll_height() as f64 - inner_height;
    let target_y = index as f64 / SECTION_COUNT as f64 * max_scroll;

    let options = web_sys::ScrollToOptions::new();
    options.set_top(target_y);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    Ok(target_y)
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_page_to_section(_index: usize) -> Result<f64, RpcError> {
    Err(RpcError::internal_error(
        "page scrolling requires a browser context",
    ))
}

fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = smoothed_fps(diagnostics).unwrap_or(0.0);
    Ok(serde_json::json!({ "fps": fps }))
}

fn flush_outgoing_messages(mut bridge: ResMut<PageBridge>) {
    for notification in bridge.outgoing_notifications.drain(..) {
        post_to_parent(&notification);
    }

    // Responses go out after notifications so a request's side effects are
    // visible to the page before its answer arrives.
    for response in bridge.outgoing_responses.drain(..) {
        post_to_parent(&response);
    }
}

fn post_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize page message: {e}");
                return;
            }
        };
        let Some(parent) = window().and_then(|w| w.parent().ok().flatten()) else {
            warn!("no parent window available for message transmission");
            return;
        };
        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
            error!("failed to send message to parent: {e:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_round_trip_through_serde() {
        let raw = r#"{"jsonrpc":"2.0","method":"scroll_to_section","params":{"index":3},"id":7}"#;
        let request: RpcRequest = serde_json::from_str(raw).expect("request parses");
        assert_eq!(request.method, "scroll_to_section");
        assert_eq!(request.params["index"], 3);
        assert_eq!(request.id, Some(serde_json::json!(7)));

        let encoded = serde_json::to_string(&request).expect("request serializes");
        let again: RpcRequest = serde_json::from_str(&encoded).expect("reparses");
        assert_eq!(again.method, request.method);
    }

    #[test]
    fn notifications_carry_no_id() {
        let raw = r#"{"jsonrpc":"2.0","method":"scroll_to_section","params":{"index":0}}"#;
        let request: RpcRequest = serde_json::from_str(raw).expect("notification parses");
        assert!(request.id.is_none());
    }

    #[test]
    fn out_of_range_sections_are_invalid_params() {
        let error = handle_scroll_to_section(&serde_json::json!({"index": SECTION_COUNT}))
            .expect_err("index past the last section is rejected");
        assert_eq!(error.code, -32602);
    }

    #[test]
    fn missing_index_is_invalid_params() {
        let error = handle_scroll_to_section(&serde_json::json!({"section": 1}))
            .expect_err("wrong parameter name is rejected");
        assert_eq!(error.code, -32602);
    }

    #[test]
    fn unknown_methods_get_an_error_response() {
        let error = RpcError::method_not_found("warp_to_section");
        assert_eq!(error.code, -32601);
        assert_eq!(error.data, Some(serde_json::json!({"method": "warp_to_section"})));

        let response = RpcResponse::failure(serde_json::json!(42), error);
        assert_eq!(response.id, Some(serde_json::json!(42)));
        assert!(response.result.is_none());
        assert_eq!(response.error.map(|e| e.code), Some(-32601));
    }

    #[test]
    fn success_responses_echo_the_request_id() {
        let response =
            RpcResponse::success(serde_json::json!("req-1"), serde_json::json!({"fps": 60.0}));
        assert_eq!(response.id, Some(serde_json::json!("req-1")));
        assert!(response.error.is_none());
        assert_eq!(response.result, Some(serde_json::json!({"fps": 60.0})));
    }
}
