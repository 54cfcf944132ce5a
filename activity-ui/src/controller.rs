//! The activity view controller.
//!
//! Binds the collaborator-owned markup by element id, issues REST calls
//! through the [`ApiClient`], renders through `activity_core::render`, and
//! reacts to external `activity:*` change events with a full unfiltered
//! reload. All listeners are attached here; nothing is exported to the
//! global scope.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use activity_core::dto::Activity;
use activity_core::events::ChangeKind;
use activity_core::filter::ListFilter;
use activity_core::form::{self, FormFields, FormMode, SubmitAction};
use activity_core::notify::Level;
use activity_core::render;
use activity_core::sequence::FetchSequencer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{CustomEvent, Document, Element, Event, HtmlFormElement, HtmlInputElement, Window};

use crate::api::{ApiClient, RedirectToLogin};
use crate::config::Config;
use crate::{dom, log, notify};

pub struct Controller {
    weak: Weak<Controller>,
    api: ApiClient,
    config: Config,
    document: Document,
    app: Element,
    form: HtmlFormElement,
    list: Element,
    search: HtmlInputElement,
    filter_status: Element,
    filter_type: Element,
    mode: Cell<FormMode>,
    list_fetches: FetchSequencer,
}

impl Controller {
    /// Bind the DOM surface, wire every listener, and start the initial
    /// load. Fails when the page does not carry the activity markup.
    pub fn mount(config: Config) -> Result<Rc<Self>, String> {
        let document = dom::document()?;
        let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
        let origin = window
            .location()
            .origin()
            .map_err(|_| "page origin not available".to_string())?;

        let app = dom::require(&document, "app")?;
        let form = dom::require_form(&document, "activity-form")?;
        let list = dom::require(&document, "activity-list")?;
        let search = dom::require_input(&document, "search-input")?;
        let filter_status = dom::require(&document, "filter-status")?;
        let filter_type = dom::require(&document, "filter-type")?;

        let api = ApiClient::new(
            format!("{origin}{}", config.api_base),
            Box::new(RedirectToLogin {
                login_path: config.login_path.clone(),
            }),
        );

        let controller = Rc::new_cyclic(|weak| Self {
            weak: weak.clone(),
            api,
            config,
            document,
            app,
            form,
            list,
            search,
            filter_status,
            filter_type,
            mode: Cell::new(FormMode::Create),
            list_fetches: FetchSequencer::new(),
        });

        controller.bind_form();
        controller.bind_filters();
        controller.bind_list_clicks();
        controller.bind_change_events(&window);

        controller.spawn_reload(controller.current_filter());
        Ok(controller)
    }

    /// The full filter set, read fresh from every control.
    fn current_filter(&self) -> ListFilter {
        ListFilter::from_inputs(
            &self.search.value(),
            &dom::control_value(&self.filter_status),
            &dom::control_value(&self.filter_type),
        )
    }

    fn read_fields(&self) -> FormFields {
        FormFields {
            name: dom::field_value(&self.form, "name"),
            description: dom::field_value(&self.form, "description"),
            activity_type: dom::field_value(&self.form, "type"),
            status: dom::field_value(&self.form, "status"),
        }
    }

    fn notify(&self, level: Level, message: &str) {
        notify::show(
            &self.document,
            &self.app,
            level,
            message,
            self.config.banner_dismiss_ms,
        );
    }

    fn spawn_reload(&self, filter: ListFilter) {
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        spawn_local(async move { controller.reload(filter).await });
    }

    /// Fetch and render the list. A response that is no longer the newest
    /// issued fetch is dropped unseen, so resolution order cannot clobber
    /// issue order.
    async fn reload(&self, filter: ListFilter) {
        let token = self.list_fetches.begin();
        match self.api.list(&filter).await {
            Ok(activities) => {
                if self.list_fetches.is_current(token) {
                    self.render_list(&activities);
                }
            }
            Err(err) => {
                log::error(&format!("failed to load activities: {err}"));
                if self.list_fetches.is_current(token) {
                    self.notify(Level::Error, "Failed to load activities");
                }
            }
        }
    }

    fn render_list(&self, activities: &[Activity]) {
        self.list.set_inner_html(&render::activity_list(activities));
    }

    fn bind_form(&self) {
        let weak = self.weak.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if let Some(controller) = weak.upgrade() {
                controller.submit();
            }
        });
        let _ = self
            .form
            .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }

    fn submit(&self) {
        let mode = self.mode.get();
        let action = mode.plan(self.read_fields());
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        spawn_local(async move {
            let (outcome, ok_message, err_message) = match &action {
                SubmitAction::Create(fields) => (
                    controller.api.create(fields).await,
                    "Activity created successfully",
                    "Failed to create activity",
                ),
                SubmitAction::Update { id, fields } => (
                    controller.api.update(*id, fields).await,
                    "Activity updated successfully",
                    "Failed to update activity",
                ),
            };
            match outcome {
                Ok(()) => {
                    controller.mode.set(mode.after_submit(true));
                    controller.form.reset();
                    controller.notify(Level::Success, ok_message);
                    controller.spawn_reload(controller.current_filter());
                }
                Err(err) => {
                    log::error(&format!("{err_message}: {err}"));
                    controller.mode.set(mode.after_submit(false));
                    controller.notify(Level::Error, err_message);
                }
            }
        });
    }

    fn bind_filters(&self) {
        self.bind_refetch(self.search.as_ref(), "input");
        self.bind_refetch(self.filter_status.as_ref(), "change");
        self.bind_refetch(self.filter_type.as_ref(), "change");
    }

    fn bind_refetch(&self, target: &web_sys::EventTarget, event: &str) {
        let weak = self.weak.clone();
        let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Some(controller) = weak.upgrade() {
                controller.spawn_reload(controller.current_filter());
            }
        });
        let _ = target.add_event_listener_with_callback(event, on_change.as_ref().unchecked_ref());
        on_change.forget();
    }

    /// One delegated listener on the list container serves every rendered
    /// Edit/Delete button.
    fn bind_list_clicks(&self) {
        let weak = self.weak.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(button)) = target.closest("[data-action][data-id]") else {
                return;
            };
            let Some(id) = button
                .get_attribute("data-id")
                .and_then(|raw| raw.parse::<u64>().ok())
            else {
                return;
            };
            match button.get_attribute("data-action").as_deref() {
                Some("edit") => controller.begin_edit(id),
                Some("delete") => controller.delete(id),
                _ => {}
            }
        });
        let _ = self
            .list
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    /// Fetch the record, populate the form verbatim, and arm it for an
    /// update, whatever the form held before.
    fn begin_edit(&self, id: u64) {
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        spawn_local(async move {
            match controller.api.get(id).await {
                Ok(activity) => {
                    controller.populate_form(&activity);
                    controller.mode.set(FormMode::Update { id });
                }
                Err(err) => {
                    log::error(&format!("failed to load activity {id}: {err}"));
                    controller.notify(Level::Error, "Failed to load activity");
                }
            }
        });
    }

    fn populate_form(&self, activity: &Activity) {
        dom::set_field_value(&self.form, "name", &activity.name);
        dom::set_field_value(
            &self.form,
            "description",
            activity.description.as_deref().unwrap_or(""),
        );
        dom::set_field_value(&self.form, "type", &activity.activity_type);
        dom::set_field_value(&self.form, "status", &activity.status);
    }

    /// Confirmation-gated delete. Declining issues no request at all.
    fn delete(&self, id: u64) {
        let confirmed = web_sys::window()
            .and_then(|window| window.confirm_with_message(&self.config.confirm_delete).ok())
            .unwrap_or(false);
        let Some(id) = form::plan_delete(id, confirmed) else {
            return;
        };
        let Some(controller) = self.weak.upgrade() else {
            return;
        };
        spawn_local(async move {
            match controller.api.delete(id).await {
                Ok(()) => {
                    controller.notify(Level::Success, "Activity deleted successfully");
                    controller.spawn_reload(controller.current_filter());
                }
                Err(err) => {
                    log::error(&format!("failed to delete activity {id}: {err}"));
                    controller.notify(Level::Error, "Failed to delete activity");
                }
            }
        });
    }

    /// External change notifications: log the payload, show one banner,
    /// reload the full unfiltered list. Any in-flight filter context is
    /// deliberately discarded.
    fn bind_change_events(&self, window: &Window) {
        for kind in ChangeKind::ALL {
            let weak = self.weak.clone();
            let on_event = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                let Some(kind) = ChangeKind::from_event_name(&event.type_()) else {
                    return;
                };
                let detail = event
                    .dyn_ref::<CustomEvent>()
                    .map(CustomEvent::detail)
                    .unwrap_or(JsValue::NULL);
                log::info_with(&format!("{} event received", kind.event_name()), &detail);
                controller.notify(Level::Info, kind.banner_message());
                controller.spawn_reload(ListFilter::default());
            });
            let _ = window
                .add_event_listener_with_callback(kind.event_name(), on_event.as_ref().unchecked_ref());
            on_event.forget();
        }
    }
}
