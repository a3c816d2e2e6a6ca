use payloads::{AssetId, ClientConfig, CompanyId, UnitId, UserId};
use reqwest::StatusCode;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod hooks;
mod logs;
mod pages;
mod utils;

use components::layout::MainLayout;
use contexts::{ApiProvider, ToastProvider};
use pages::{
    AssetRegistrationPage, AssetViewPage, CompanyListPage,
    CompanyRegistrationPage, CompanyViewPage, NotFoundPage,
    UnitRegistrationPage, UserRegistrationPage,
};

/// Resolve where the backend lives: `BACKEND_URL` at build time, otherwise
/// the `/api` scope on the serving origin.
pub fn client_config() -> ClientConfig {
    let base_url = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            let origin = web_sys::window()
                .and_then(|window| window.location().origin().ok())
                .unwrap_or_default();
            format!("{origin}/api")
        });

    ClientConfig { base_url }
}

#[function_component]
pub fn App() -> Html {
    use_memo((), |_| logs::init_logging());
    let config = use_memo((), |_| client_config());

    html! {
        <BrowserRouter>
            <ApiProvider config={(*config).clone()}>
                <ToastProvider>
                    <MainLayout>
                        <Switch<Route> render={switch} />
                    </MainLayout>
                </ToastProvider>
            </ApiProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/empresas")]
    Companies,
    #[at("/cadastrar-empresa")]
    CreateCompany,
    #[at("/empresas/:company_id/editar")]
    EditCompany { company_id: CompanyId },
    #[at("/cadastrar-unidade")]
    CreateUnit,
    #[at("/empresas/:company_id/unidades/:unit_id/editar")]
    EditUnit {
        company_id: CompanyId,
        unit_id: UnitId,
    },
    #[at("/cadastrar-usuario")]
    CreateUser,
    #[at("/empresas/:company_id/usuarios/:user_id/editar")]
    EditUser {
        company_id: CompanyId,
        user_id: UserId,
    },
    #[at("/cadastrar-ativo")]
    CreateAsset,
    #[at("/empresas/:company_id/ativos/:asset_id/editar")]
    EditAsset {
        company_id: CompanyId,
        asset_id: AssetId,
    },
    #[at("/empresas/:company_id/ativos/:asset_id")]
    AssetView {
        company_id: CompanyId,
        asset_id: AssetId,
    },
    #[at("/empresas/:company_id")]
    CompanyRoot { company_id: CompanyId },
    #[at("/empresas/:company_id/:tab")]
    Company {
        company_id: CompanyId,
        tab: CompanyTab,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Tabs of the company view. Unknown segments land on the assets tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyTab {
    Cover,
    Units,
    Users,
    Assets,
}

impl CompanyTab {
    pub const ALL: [CompanyTab; 4] =
        [Self::Cover, Self::Units, Self::Users, Self::Assets];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cover => "Visão Geral",
            Self::Units => "Unidades",
            Self::Users => "Usuários",
            Self::Assets => "Ativos",
        }
    }
}

impl std::fmt::Display for CompanyTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let segment = match self {
            Self::Cover => "cover",
            Self::Units => "unidades",
            Self::Users => "usuarios",
            Self::Assets => "ativos",
        };
        f.write_str(segment)
    }
}

impl std::str::FromStr for CompanyTab {
    type Err = std::convert::Infallible;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        Ok(match segment {
            "cover" => Self::Cover,
            "unidades" => Self::Units,
            "usuarios" => Self::Users,
            _ => Self::Assets,
        })
    }
}

/// Whether a registration page creates a new entity or edits an existing
/// one. Decided once from the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id: Copy> FormMode<Id> {
    pub fn id(&self) -> Option<Id> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Status a successful submit must answer with.
    pub fn expected_status(&self) -> StatusCode {
        match self {
            Self::Create => StatusCode::CREATED,
            Self::Edit(_) => StatusCode::OK,
        }
    }
}

/// A registration route with its mode already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Company(FormMode<CompanyId>),
    Unit(FormMode<UnitId>),
    User(FormMode<UserId>),
    Asset(FormMode<AssetId>),
}

impl Route {
    pub fn registration(&self) -> Option<Registration> {
        use FormMode::{Create, Edit};

        let registration = match self {
            Route::CreateCompany => Registration::Company(Create),
            Route::EditCompany { company_id } => {
                Registration::Company(Edit(*company_id))
            }
            Route::CreateUnit => Registration::Unit(Create),
            Route::EditUnit { unit_id, .. } => {
                Registration::Unit(Edit(*unit_id))
            }
            Route::CreateUser => Registration::User(Create),
            Route::EditUser { user_id, .. } => {
                Registration::User(Edit(*user_id))
            }
            Route::CreateAsset => Registration::Asset(Create),
            Route::EditAsset { asset_id, .. } => {
                Registration::Asset(Edit(*asset_id))
            }
            _ => return None,
        };
        Some(registration)
    }
}

fn switch(route: Route) -> Html {
    if let Some(registration) = route.registration() {
        return match registration {
            Registration::Company(mode) => {
                html! { <CompanyRegistrationPage {mode} /> }
            }
            Registration::Unit(mode) => {
                html! { <UnitRegistrationPage {mode} /> }
            }
            Registration::User(mode) => {
                html! { <UserRegistrationPage {mode} /> }
            }
            Registration::Asset(mode) => {
                html! { <AssetRegistrationPage {mode} /> }
            }
        };
    }

    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Companies} /> },
        Route::Companies => html! { <CompanyListPage /> },
        Route::CompanyRoot { company_id } => html! {
            <Redirect<Route> to={Route::Company { company_id, tab: CompanyTab::Assets }} />
        },
        Route::Company { company_id, tab } => {
            html! { <CompanyViewPage {company_id} {tab} /> }
        }
        Route::AssetView {
            company_id,
            asset_id,
        } => html! { <AssetViewPage {company_id} {asset_id} /> },
        _ => html! { <NotFoundPage /> },
    }
}
