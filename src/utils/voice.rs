//! 音声入力（Web Speech API）
//!
//! `SpeechRecognition` は web-sys では unstable 扱いなので、
//! `js_sys::Reflect` でコンストラクタを引いて使う。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::CareerError;
use crate::utils::log_trace::{log_info, log_warn};

const CONSTRUCTOR_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// 音声認識を開始する
///
/// 認識結果は先頭候補をそのまま `on_transcript` に渡す（trimしない）。
/// 認識中のエラーは `on_error` に渡す。開始できなかった場合だけ `Err` を返す。
pub fn start_voice<T, E>(locale: &str, on_transcript: T, on_error: E) -> Result<(), CareerError>
where
    T: Fn(String) + 'static,
    E: Fn(CareerError) + 'static,
{
    let window = web_sys::window().ok_or(CareerError::VoiceUnsupported)?;
    let ctor = recognition_constructor(&window).ok_or_else(|| {
        log_warn("voice", "SpeechRecognition 非対応");
        CareerError::VoiceUnsupported
    })?;

    let recognition = js_sys::Reflect::construct(&ctor, &js_sys::Array::new())
        .map_err(|_| CareerError::VoiceUnsupported)?;
    set_prop(&recognition, "lang", &JsValue::from_str(locale))?;

    let onresult = Closure::wrap(Box::new(move |event: JsValue| {
        if let Some(text) = top_transcript(&event) {
            on_transcript(text);
        }
    }) as Box<dyn FnMut(JsValue)>);
    set_prop(&recognition, "onresult", onresult.as_ref())?;
    onresult.forget();

    let onerror = Closure::wrap(Box::new(move |event: JsValue| {
        let code = js_sys::Reflect::get(&event, &JsValue::from_str("error"))
            .ok()
            .and_then(|v| v.as_string());
        let err = recognition_error(code);
        log_warn("voice", &err.to_string());
        on_error(err);
    }) as Box<dyn FnMut(JsValue)>);
    set_prop(&recognition, "onerror", onerror.as_ref())?;
    onerror.forget();

    let start = js_sys::Reflect::get(&recognition, &JsValue::from_str("start"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or(CareerError::VoiceUnsupported)?;
    start.call0(&recognition).map_err(|_| CareerError::VoiceUnsupported)?;

    log_info("voice", &format!("音声認識開始 ({})", locale));
    Ok(())
}

fn recognition_constructor(window: &web_sys::Window) -> Option<js_sys::Function> {
    CONSTRUCTOR_NAMES.iter().find_map(|name| {
        js_sys::Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
    })
}

fn set_prop(target: &JsValue, key: &str, value: &JsValue) -> Result<(), CareerError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|_| CareerError::VoiceUnsupported)
}

/// `event.results[0][0].transcript`
fn top_transcript(event: &JsValue) -> Option<String> {
    let results = js_sys::Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let first = js_sys::Reflect::get_u32(&results, 0).ok()?;
    let alternative = js_sys::Reflect::get_u32(&first, 0).ok()?;
    js_sys::Reflect::get(&alternative, &JsValue::from_str("transcript"))
        .ok()?
        .as_string()
}

fn recognition_error(code: Option<String>) -> CareerError {
    CareerError::Recognition(code.filter(|c| !c.is_empty()).unwrap_or_else(|| "unknown".to_string()))
}
