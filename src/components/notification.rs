use std::rc::Rc;

use gloo_timers::callback::Timeout;
use stylist::yew::styled_component;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Info => "#1f2b7b",
            NotificationKind::Success => "#5fc3ac",
            NotificationKind::Error => "#e74c3c",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

impl ToastPhase {
    pub fn transform(&self) -> &'static str {
        match self {
            ToastPhase::Shown => "translateX(0)",
            ToastPhase::Entering | ToastPhase::Leaving => "translateX(400px)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: ToastPhase,
}

/// Every action but `Show` targets a toast id; actions for a toast that is gone are ignored.
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationAction {
    Show { message: String, kind: NotificationKind },
    Reveal(u64),
    Dismiss(u64),
    Remove(u64),
}

/// Single-slot notification state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl NotificationState {
    fn live_phase(&self, id: u64) -> Option<ToastPhase> {
        self.current.as_ref().filter(|t| t.id == id).map(|t| t.phase)
    }

    fn with_phase(&self, phase: ToastPhase) -> Rc<Self> {
        Rc::new(NotificationState {
            current: self.current.clone().map(|t| Toast { phase, ..t }),
            next_id: self.next_id,
        })
    }
}

impl Reducible for NotificationState {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            NotificationAction::Show { message, kind } => Rc::new(NotificationState {
                current: Some(Toast {
                    id: self.next_id,
                    message,
                    kind,
                    phase: ToastPhase::Entering,
                }),
                next_id: self.next_id + 1,
            }),
            NotificationAction::Reveal(id) => match self.live_phase(id) {
                Some(ToastPhase::Entering) => self.with_phase(ToastPhase::Shown),
                _ => self,
            },
            NotificationAction::Dismiss(id) => match self.live_phase(id) {
                Some(ToastPhase::Entering) | Some(ToastPhase::Shown) => {
                    self.with_phase(ToastPhase::Leaving)
                }
                _ => self,
            },
            NotificationAction::Remove(id) => match self.live_phase(id) {
                Some(_) => Rc::new(NotificationState {
                    current: None,
                    next_id: self.next_id,
                }),
                None => self,
            },
        }
    }
}

/// Handle handed to components through context.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
}

impl Notifier {
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
        self.dispatch.emit(NotificationAction::Show {
            message: message.into(),
            kind,
        });
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(|| {
        log::warn!("No NotificationProvider mounted, notifications are dropped");
        Notifier { dispatch: Callback::noop() }
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationState::default);

    let dispatch = {
        let dispatcher = state.dispatcher();
        use_memo(move |_| Callback::from(move |action| dispatcher.dispatch(action)), ())
    };
    let notifier = Notifier { dispatch: (*dispatch).clone() };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            {
                if let Some(toast) = state.current.clone() {
                    html! { <ToastView key={toast.id} toast={toast.clone()} dispatch={(*dispatch).clone()} /> }
                } else {
                    html! {}
                }
            }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    dispatch: Callback<NotificationAction>,
}

#[styled_component]
fn ToastView(props: &ToastViewProps) -> Html {
    let id = props.toast.id;
    let leaving = props.toast.phase == ToastPhase::Leaving;

    // Timers are never cancelled; a fired timer for a replaced or removed toast is ignored.
    {
        let dispatch = props.dispatch.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let reveal = dispatch.clone();
                Timeout::new(config::NOTIFICATION_ENTER_DELAY_MS, move || {
                    reveal.emit(NotificationAction::Reveal(id));
                })
                .forget();
                Timeout::new(config::NOTIFICATION_AUTO_DISMISS_MS, move || {
                    dispatch.emit(NotificationAction::Dismiss(id));
                })
                .forget();
                || ()
            },
            id,
        );
    }

    {
        let dispatch = props.dispatch.clone();
        use_effect_with_deps(
            move |(id, leaving)| {
                if *leaving {
                    let id = *id;
                    Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                        dispatch.emit(NotificationAction::Remove(id));
                    })
                    .forget();
                }
                || ()
            },
            (id, leaving),
        );
    }

    let on_close = {
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatch.emit(NotificationAction::Dismiss(id));
        })
    };

    let frame = css!(
        r#"
            position: fixed;
            top: 100px;
            right: 20px;
            background: ${bg};
            color: white;
            padding: 1rem 1.5rem;
            border-radius: 10px;
            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15);
            z-index: 10000;
            transition: transform 0.3s ease;
            max-width: 300px;

            .notification-close {
                background: none;
                border: none;
                color: inherit;
                font-size: 1.25rem;
                cursor: pointer;
                margin-inline-start: 0.75rem;
            }
        "#,
        bg = props.toast.kind.color()
    );

    html! {
        <div
            class={classes!("notification", props.toast.kind.class(), frame)}
            style={format!("transform: {};", props.toast.phase.transform())}
            role="status"
        >
            <div class="notification-content">
                <span class="notification-message">{&props.toast.message}</span>
                <button class="notification-close" aria-label="close" onclick={on_close}>{"×"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<NotificationAction>) -> Rc<NotificationState> {
        actions
            .into_iter()
            .fold(Rc::new(NotificationState::default()), |state, action| state.reduce(action))
    }

    fn show(message: &str, kind: NotificationKind) -> NotificationAction {
        NotificationAction::Show {
            message: message.to_string(),
            kind,
        }
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::Info.color(), "#1f2b7b");
    }

    #[test]
    fn second_show_replaces_the_first() {
        let state = reduce_all(vec![
            show("first", NotificationKind::Success),
            show("second", NotificationKind::Error),
        ]);
        let toast = state.current.as_ref().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.phase, ToastPhase::Entering);
        assert_eq!(toast.id, 1);
    }

    #[test]
    fn full_lifecycle() {
        let state = reduce_all(vec![show("hi", NotificationKind::Info), NotificationAction::Reveal(0)]);
        assert_eq!(state.current.as_ref().unwrap().phase.transform(), "translateX(0)");

        let state = state.reduce(NotificationAction::Dismiss(0));
        assert_eq!(state.current.as_ref().unwrap().phase, ToastPhase::Leaving);
        assert_eq!(state.current.as_ref().unwrap().phase.transform(), "translateX(400px)");

        let state = state.reduce(NotificationAction::Remove(0));
        assert!(state.current.is_none());
    }

    #[test]
    fn auto_dismiss_after_manual_close_is_a_no_op() {
        let state = reduce_all(vec![
            show("hi", NotificationKind::Info),
            NotificationAction::Reveal(0),
            NotificationAction::Dismiss(0),
        ]);
        // The auto-dismiss timer fires while the exit transition runs.
        let again = Rc::clone(&state).reduce(NotificationAction::Dismiss(0));
        assert!(Rc::ptr_eq(&state, &again));

        let removed = again.reduce(NotificationAction::Remove(0));
        assert!(removed.current.is_none());

        let late = Rc::clone(&removed).reduce(NotificationAction::Dismiss(0));
        assert!(Rc::ptr_eq(&removed, &late));
        let late = late.reduce(NotificationAction::Remove(0));
        assert!(late.current.is_none());
    }

    #[test]
    fn stale_timers_do_not_touch_a_newer_toast() {
        let state = reduce_all(vec![
            show("old", NotificationKind::Info),
            show("new", NotificationKind::Success),
            NotificationAction::Reveal(0),
            NotificationAction::Dismiss(0),
            NotificationAction::Remove(0),
        ]);
        let toast = state.current.as_ref().unwrap();
        assert_eq!(toast.message, "new");
        assert_eq!(toast.phase, ToastPhase::Entering);
    }

    #[test]
    fn reveal_after_dismiss_does_not_bring_it_back() {
        let state = reduce_all(vec![
            show("hi", NotificationKind::Info),
            NotificationAction::Dismiss(0),
            NotificationAction::Reveal(0),
        ]);
        assert_eq!(state.current.as_ref().unwrap().phase, ToastPhase::Leaving);
    }
}
