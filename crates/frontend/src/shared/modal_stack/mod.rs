//! Стек диалогов добавления и редактирования.
//!
//! Диалог открывается через `ModalStackService::open`, закрывается через
//! `DialogHandle::close`. Escape и клик по подложке закрывают только верхний
//! диалог и только если его `can_close` разрешает (например, не идёт сохранение).

use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type DialogBuilder = Arc<dyn Fn(DialogHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

/// Внешний вид и защита от закрытия
#[derive(Clone, Default)]
pub struct DialogOptions {
    pub modal_class: Option<String>,
    pub modal_style: Option<String>,
    pub can_close: Option<CloseGuard>,
}

impl DialogOptions {
    pub fn class(modal_class: &str) -> Self {
        Self {
            modal_class: Some(modal_class.to_string()),
            ..Self::default()
        }
    }

    /// Закрытие по Escape и подложке только когда `guard` возвращает true
    pub fn guarded(mut self, guard: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.can_close = Some(Arc::new(guard));
        self
    }
}

#[derive(Clone)]
struct DialogEntry {
    id: u64,
    builder: DialogBuilder,
    options: DialogOptions,
}

impl DialogEntry {
    fn can_close(&self) -> bool {
        self.options.can_close.as_ref().map_or(true, |guard| guard())
    }
}

/// Передаётся в построитель диалога, чтобы тот мог закрыть себя сам
#[derive(Clone, Copy)]
pub struct DialogHandle {
    id: u64,
    svc: ModalStackService,
}

impl DialogHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<DialogEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Отложить на следующий тик: диалог нельзя удалять синхронно
    /// во время обработки того же DOM-события.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn open<F>(&self, options: DialogOptions, builder: F) -> DialogHandle
    where
        F: Fn(DialogHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        let entry = DialogEntry {
            id,
            builder: Arc::new(builder),
            options,
        };
        self.stack.update(|s| s.push(entry));
        log::debug!("dialog {} opened", id);

        DialogHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    /// Закрывает верхний диалог, если он это разрешает
    fn close_top_if_allowed(&self) {
        let top = self
            .stack
            .with_untracked(|s| s.last().filter(|e| e.can_close()).map(|e| e.id));
        if let Some(id) = top {
            self.close_deferred(id);
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Рендерит стек диалогов. Монтируется один раз в корне приложения.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    svc.close_top_if_allowed();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // живёт всё время работы приложения
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, DialogEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let z_index = 1000 + idx as i32;
                    let on_close = {
                        let entry = entry.clone();
                        Callback::new(move |_| {
                            if entry.can_close() {
                                svc.close_deferred(entry.id);
                            }
                        })
                    };

                    let view = (entry.builder)(DialogHandle { id: entry.id, svc });

                    view! {
                        <ModalFrame
                            z_index=z_index
                            on_close=on_close
                            modal_style=entry.options.modal_style.clone().unwrap_or_default()
                            modal_class=entry.options.modal_class.clone().unwrap_or_default()
                        >
                            {view}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}
