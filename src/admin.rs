use crate::constants::{APP_ROOT_ID, ATTR_API_BASE};
use crate::core::{
    parse_projects, ApiConfig, LoginRequest, LoginResponse, Method, Project, ProjectDraft,
    Session, StudioError,
};
use crate::dom::{self, js_error};
use crate::http::{self, Body};
use crate::storage::LocalTokenStore;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys as web;

struct AdminInner {
    api: ApiConfig,
    session: RefCell<Session<LocalTokenStore>>,
}

impl AdminInner {
    fn bearer(&self) -> Result<String, StudioError> {
        self.session
            .borrow()
            .bearer()
            .ok_or(StudioError::Unauthenticated)
    }
}

/// Admin dashboard client. Every async method returns a promise that rejects
/// with the error message on failure.
#[wasm_bindgen]
pub struct AdminClient {
    inner: Rc<AdminInner>,
}

#[wasm_bindgen]
impl AdminClient {
    #[wasm_bindgen(constructor)]
    pub fn new(api_base: Option<String>) -> AdminClient {
        let api = api_base
            .or_else(page_api_base)
            .as_deref()
            .map(ApiConfig::new)
            .unwrap_or_default();
        AdminClient {
            inner: Rc::new(AdminInner {
                api,
                session: RefCell::new(Session::restore(LocalTokenStore::open())),
            }),
        }
    }

    #[wasm_bindgen(js_name = isSignedIn)]
    pub fn is_signed_in(&self) -> bool {
        self.inner.session.borrow().is_signed_in()
    }

    pub fn login(&self, email: String, password: String) -> js_sys::Promise {
        let inner = self.inner.clone();
        promise(async move {
            let token = login(&inner.api, &LoginRequest::new(&email, &password)).await?;
            inner.session.borrow_mut().login(&token);
            log::info!("[admin] signed in");
            Ok(JsValue::UNDEFINED)
        })
    }

    pub fn logout(&self) {
        self.inner.session.borrow_mut().logout();
        log::info!("[admin] signed out");
    }

    /// Checks the stored token against `/admin/me`; a rejected token signs out.
    pub fn validate(&self) -> js_sys::Promise {
        let inner = self.inner.clone();
        promise(async move {
            let Some(bearer) = inner.session.borrow().bearer() else {
                return Ok(JsValue::FALSE);
            };
            let valid = match http::send(Method::Get, &inner.api.me_url(), Some(&bearer), Body::Empty).await {
                Ok(reply) => reply.ok(),
                Err(e) => {
                    log::warn!("[admin] session check failed: {}", e);
                    false
                }
            };
            if !valid {
                inner.session.borrow_mut().logout();
            }
            Ok(JsValue::from_bool(valid))
        })
    }

    #[wasm_bindgen(js_name = listProjects)]
    pub fn list_projects(&self) -> js_sys::Promise {
        let inner = self.inner.clone();
        promise(async move {
            let projects = fetch_projects(&inner.api).await?;
            to_js(&inner.api, &projects)
        })
    }

    #[wasm_bindgen(js_name = imageUrl)]
    pub fn image_url(&self, file: String) -> String {
        self.inner.api.image_url(&file)
    }

    /// Creates a project, or updates `id` when given.
    #[wasm_bindgen(js_name = saveProject)]
    pub fn save_project(
        &self,
        id: Option<u32>,
        title: String,
        description: String,
        link: String,
        image: Option<web::File>,
    ) -> js_sys::Promise {
        let inner = self.inner.clone();
        let draft = ProjectDraft {
            editing: id.map(u64::from),
            title,
            description,
            link,
        };
        promise(async move {
            draft.validate()?;
            let bearer = inner.bearer()?;
            let form = web::FormData::new().map_err(js_error)?;
            for (name, value) in draft.fields() {
                form.append_with_str(name, value).map_err(js_error)?;
            }
            if let Some(file) = &image {
                form.append_with_blob("image", file).map_err(js_error)?;
            }
            let (method, url) = draft.target(&inner.api);
            http::send(method, &url, Some(&bearer), Body::Form(form))
                .await?
                .into_ok_body()?;
            log::info!("[admin] saved project ({})", method.as_str());
            let projects = fetch_projects(&inner.api).await?;
            to_js(&inner.api, &projects)
        })
    }

    #[wasm_bindgen(js_name = deleteProject)]
    pub fn delete_project(&self, id: u32) -> js_sys::Promise {
        let inner = self.inner.clone();
        promise(async move {
            let bearer = inner.bearer()?;
            let url = inner.api.project_url(id as u64);
            http::send(Method::Delete, &url, Some(&bearer), Body::Empty)
                .await?
                .into_ok_body()?;
            log::info!("[admin] deleted project {}", id);
            Ok(JsValue::UNDEFINED)
        })
    }
}

pub async fn fetch_projects(api: &ApiConfig) -> Result<Vec<Project>, StudioError> {
    let body = http::send(Method::Get, &api.projects_url(), None, Body::Empty)
        .await?
        .into_ok_body()?;
    parse_projects(&body)
}

async fn login(api: &ApiConfig, request: &LoginRequest) -> Result<String, StudioError> {
    let reply = http::send(
        Method::Post,
        &api.login_url(),
        None,
        Body::Json(request.to_json()?),
    )
    .await?;
    if !reply.ok() {
        return Err(StudioError::InvalidCredentials);
    }
    let LoginResponse { token } = serde_json::from_str(&reply.body)?;
    Ok(token)
}

/// `data-api-base` on the app root, if the page sets one.
fn page_api_base() -> Option<String> {
    let document = dom::window_document()?;
    let root = document.get_element_by_id(APP_ROOT_ID)?;
    dom::data_attr(&root, ATTR_API_BASE)
}

/// A project as handed to the page, with its image resolved against the API base.
#[derive(Serialize)]
struct ProjectEntry<'a> {
    #[serde(flatten)]
    project: &'a Project,
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
}

fn to_js(api: &ApiConfig, projects: &[Project]) -> Result<JsValue, StudioError> {
    let entries: Vec<ProjectEntry> = projects
        .iter()
        .map(|project| ProjectEntry {
            project,
            image_url: project.image_url(api),
        })
        .collect();
    let json = serde_json::to_string(&entries)?;
    js_sys::JSON::parse(&json).map_err(js_error)
}

fn promise(
    fut: impl std::future::Future<Output = Result<JsValue, StudioError>> + 'static,
) -> js_sys::Promise {
    future_to_promise(async move {
        fut.await.map_err(|e| {
            log::error!("[admin] {}", e);
            JsValue::from_str(&e.to_string())
        })
    })
}
