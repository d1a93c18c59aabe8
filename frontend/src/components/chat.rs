use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::state::AppState;

/// Main chat area with message history, typing indicator, suggestions and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let list_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        state.messages.track();
        state.is_sending.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    view! {
        <main class="chat-area">
            // Error banner
            {move || {
                state.error.get().map(|err| {
                    view! {
                        <div class="error-banner">{err}</div>
                    }
                })
            }}

            <div class="chat-header">"Canned Chat"</div>

            // Messages
            <div class="messages-container" node_ref=list_ref>
                <Show
                    when=move || !state.messages.get().is_empty()
                    fallback=|| view! {
                        <div class="empty-state">"Say hello to start chatting"</div>
                    }
                >
                    <For
                        each=move || state.messages.get().into_iter().enumerate()
                        key=|(index, _)| *index
                        let:entry
                    >
                        <MessageBubble role=entry.1.role.clone() content=entry.1.content.clone() />
                    </For>
                </Show>
                // Typing indicator while the request is in flight
                <Show when=move || state.is_sending.get()>
                    <div class="message assistant">
                        <div class="role-label">"assistant"</div>
                        <div class="typing-indicator">"…"</div>
                    </div>
                </Show>
            </div>

            <SuggestionPills />
            <ChatInput />
        </main>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(role: String, content: String) -> impl IntoView {
    let css_class = if role == "user" {
        "message user"
    } else {
        "message assistant"
    };

    view! {
        <div class=css_class>
            <div class="role-label">{role}</div>
            <div class="message-content">{content}</div>
        </div>
    }
}

/// Follow-up prompts from the last reply; clicking one sends it.
#[component]
fn SuggestionPills() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="suggestions">
            <For
                each=move || state.suggestions.get()
                key=|suggestion| suggestion.clone()
                let:suggestion
            >
                {
                    let text = suggestion.clone();
                    view! {
                        <button
                            class="suggestion-pill"
                            disabled=move || state.is_sending.get()
                            on:click=move |_| state.send_message(text.clone())
                        >
                            {suggestion}
                        </button>
                    }
                }
            </For>
        </div>
    }
}

/// Composer: auto-resizing textarea and send button.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());
    let textarea_ref = NodeRef::<html::Textarea>::new();

    let is_sending = move || state.is_sending.get();

    // Grow with the content instead of scrolling inside the box
    let resize = move || {
        if let Some(textarea) = textarea_ref.get() {
            let style = web_sys::HtmlElement::style(&textarea);
            let _ = style.set_property("height", "auto");
            let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
        }
    };

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || state.is_sending.get_untracked() {
            return;
        }
        set_input.set(String::new());
        if let Some(textarea) = textarea_ref.get() {
            textarea.set_value("");
        }
        resize();
        state.send_message(text);
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <textarea
                    rows="1"
                    node_ref=textarea_ref
                    placeholder="Type a message… (Enter to send, Shift+Enter for newline)"
                    prop:value=input
                    on:input=move |ev| {
                        set_input.set(event_target_value(&ev));
                        resize();
                    }
                    on:keydown=on_keydown
                    disabled=is_sending
                />
                <button
                    class="send-btn"
                    on:click=move |_| send()
                    disabled=move || is_sending() || input.get().trim().is_empty()
                >
                    {move || if is_sending() { "Sending…" } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
