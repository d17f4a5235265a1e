use crate::constants::{AUDIO_ID, MUSIC_NEXT_ID, MUSIC_PREV_ID, MUSIC_TOGGLE_ID, NOW_PLAYING_ID};
use crate::{dom, style};
use folio_core::player::{format_time, PlayerState};
use folio_core::{AppContext, SubscriptionSet};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn audio_element(document: &web::Document) -> Option<web::HtmlAudioElement> {
    document
        .get_element_by_id(AUDIO_ID)?
        .dyn_into::<web::HtmlAudioElement>()
        .ok()
}

/// Start playback; a rejected `play()` (autoplay policy, bad source) leaves
/// the player marked as paused.
fn play(audio: &web::HtmlAudioElement, ctx: &AppContext) {
    let promise = match audio.play() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[music] play failed: {:?}", e);
            ctx.player.update(|p| p.playing = false);
            return;
        }
    };
    let ctx = ctx.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => ctx.player.update(|p| p.playing = true),
            Err(e) => {
                log::warn!("[music] play rejected: {:?}", e);
                ctx.player.update(|p| p.playing = false);
            }
        }
    });
}

fn load_current(audio: &web::HtmlAudioElement, ctx: &AppContext) {
    if let Some(track) = ctx.current_track() {
        audio.set_src(&track.src);
        log::info!("[music] loaded '{}'", track.title);
    }
}

pub fn wire_player(document: &web::Document, ctx: &AppContext) -> SubscriptionSet {
    let mut subs = SubscriptionSet::new();
    let Some(audio) = audio_element(document) else {
        log::warn!("#{} not found, music disabled", AUDIO_ID);
        return subs;
    };
    load_current(&audio, ctx);

    {
        let audio = audio.clone();
        let ctx = ctx.clone();
        subs.push(dom::on_click(document, MUSIC_TOGGLE_ID, move || {
            if ctx.player.with(|p| p.playing) {
                _ = audio.pause();
                ctx.player.update(|p| p.playing = false);
            } else {
                play(&audio, &ctx);
            }
        }));
    }
    {
        let ctx = ctx.clone();
        subs.push(dom::on_click(document, MUSIC_NEXT_ID, move || ctx.skip_next()));
    }
    {
        let ctx = ctx.clone();
        subs.push(dom::on_click(document, MUSIC_PREV_ID, move || ctx.skip_prev()));
    }
    {
        let ctx = ctx.clone();
        subs.push(dom::listen(&audio, "ended", true, move |_: web::Event| {
            ctx.track_ended()
        }));
    }
    {
        let ctx = ctx.clone();
        let a = audio.clone();
        subs.push(dom::listen(&audio, "timeupdate", true, move |_: web::Event| {
            ctx.player
                .update(|p| p.set_position(a.current_time(), a.duration()));
        }));
    }

    // Reload the element whenever the track index moves; keep playing if we were.
    {
        let ctx_sub = ctx.clone();
        let last_index = Rc::new(Cell::new(ctx.player.with(|p| p.index)));
        let audio = audio.clone();
        subs.push(ctx.player.subscribe(move |p: &PlayerState| {
            if p.index == last_index.get() {
                return;
            }
            last_index.set(p.index);
            load_current(&audio, &ctx_sub);
            if p.playing {
                play(&audio, &ctx_sub);
            }
        }));
    }

    {
        let document = document.clone();
        let ctx_sub = ctx.clone();
        subs.push(ctx.player.subscribe(move |p: &PlayerState| {
            render_now_playing(&document, &ctx_sub, p);
        }));
    }
    render_now_playing(document, ctx, &ctx.player.get());
    subs
}

fn render_now_playing(document: &web::Document, ctx: &AppContext, p: &PlayerState) {
    if let Some(btn) = document.get_element_by_id(MUSIC_TOGGLE_ID) {
        _ = btn.set_attribute("aria-pressed", if p.playing { "true" } else { "false" });
    }
    let Some(el) = document.get_element_by_id(NOW_PLAYING_ID) else {
        return;
    };
    let Some(track) = ctx.current_track() else {
        return;
    };
    if let Ok(Some(title)) = el.query_selector(".np-title") {
        title.set_text_content(Some(&track.title));
    }
    if let Ok(Some(artist)) = el.query_selector(".np-artist") {
        artist.set_text_content(track.artist.as_deref());
    }
    if let Ok(Some(time)) = el.query_selector(".np-time") {
        let text = format!("{} / {}", format_time(p.current_time), format_time(p.duration));
        time.set_text_content(Some(&text));
    }
    if let Ok(Some(bar)) = el.query_selector(".np-progress") {
        dom::set_style(&bar, &style::progress_bar_css(p.progress_percent()));
    }
    _ = el.set_attribute("data-playing", if p.playing { "1" } else { "0" });
}
