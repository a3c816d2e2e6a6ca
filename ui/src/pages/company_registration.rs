use payloads::{Company, CompanyId, ResourcePath, requests::CompanyData};
use yew::prelude::*;

use super::registration::{
    FormError, delete_handlers, entity_path, first_error, has_saved, save_handlers,
};
use crate::{
    FormMode, Route,
    components::{RegistrationForm, TextField},
    contexts::use_toast,
    hooks::{
        use_delete_data, use_get_data, use_go_back, use_post_data,
        use_push_route, use_put_data, use_title,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyForm {
    pub name: String,
}

impl From<&Company> for CompanyForm {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
        }
    }
}

impl CompanyForm {
    pub fn to_request(&self) -> Result<CompanyData, FormError> {
        let data = CompanyData {
            name: self.name.trim().to_string(),
        };
        data.validate()?;
        Ok(data)
    }
}

/// Companies have no parent, so every outcome returns to the list.
fn saved_route(_: &Company) -> Route {
    Route::Companies
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: FormMode<CompanyId>,
}

#[function_component]
pub fn CompanyRegistrationPage(props: &Props) -> Html {
    let mode = props.mode;
    let title = if mode.is_edit() {
        "Editar Empresa"
    } else {
        "Cadastrar Empresa"
    };
    use_title(title);

    let toast = use_toast();
    let push_route = use_push_route();
    let path = entity_path(mode.id(), ResourcePath::Company, ResourcePath::Companies);
    let company = use_get_data::<Company>(path, mode.is_edit());
    let form = use_state(CompanyForm::default);

    {
        let form = form.clone();
        use_effect_with((mode, company.data.clone()), move |(mode, company)| {
            match company {
                Some(company) => form.set(CompanyForm::from(company)),
                None if !mode.is_edit() => form.set(CompanyForm::default()),
                None => {}
            }
        });
    }

    let save = save_handlers(
        mode.expected_status(),
        toast.clone(),
        push_route.clone(),
        if mode.is_edit() {
            "Empresa atualizada"
        } else {
            "Empresa cadastrada"
        },
        saved_route,
    );
    let (create, creating) =
        use_post_data::<CompanyData, Company>(ResourcePath::Companies, save.clone());
    let (update, updating) = use_put_data::<CompanyData, Company>(path, save);
    let (delete, deleting) = use_delete_data(
        path,
        delete_handlers(
            toast.clone(),
            push_route.clone(),
            "Empresa removida",
            Route::Companies,
        ),
    );

    let on_submit = {
        let form = form.clone();
        Callback::from(move |_: ()| match form.to_request() {
            Ok(body) => match mode {
                FormMode::Create => create.emit(body),
                FormMode::Edit(_) => update.emit(body),
            },
            Err(e) => toast.error(e.to_string()),
        })
    };

    let go_back = use_go_back(Route::Companies);

    let on_name = {
        let form = form.clone();
        Callback::from(move |name: String| form.set(CompanyForm { name }))
    };

    let error =
        first_error(&[&creating.error, &updating.error, &deleting.error]);
    let is_saved = has_saved(&creating, mode.expected_status())
        || has_saved(&updating, mode.expected_status());

    let page = html! {
        <RegistrationForm
            title={title}
            entity_label="Empresa"
            is_edit={mode.is_edit()}
            is_saving={creating.is_loading || updating.is_loading}
            is_deleting={deleting.is_loading}
            {is_saved}
            {error}
            {on_submit}
            on_cancel={go_back}
            on_delete={delete}
        >
            <TextField
                id="company-name"
                label="Nome"
                value={form.name.clone()}
                on_change={on_name}
                placeholder="Nome da empresa"
            />
        </RegistrationForm>
    };

    if mode.is_edit() {
        company.render("empresa", |_| page)
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::registration::check_status;
    use payloads::requests::ValidationError;
    use reqwest::StatusCode;

    #[test]
    fn edit_form_is_prefilled_from_the_company() {
        let company = Company {
            id: CompanyId(42),
            name: "Acme".into(),
        };
        assert_eq!(CompanyForm::from(&company).name, "Acme");
    }

    #[test]
    fn creating_acme_returns_to_the_list_on_201() {
        let form = CompanyForm {
            name: "  Acme ".into(),
        };
        let body = form.to_request().unwrap();
        assert_eq!(body.name, "Acme");

        let mode: FormMode<CompanyId> = FormMode::Create;
        assert!(check_status(mode.expected_status(), StatusCode::CREATED).is_ok());
        let created = Company {
            id: CompanyId(1),
            name: body.name,
        };
        assert_eq!(saved_route(&created), Route::Companies);
    }

    #[test]
    fn blank_name_never_reaches_the_backend() {
        let form = CompanyForm { name: " ".into() };
        assert_eq!(
            form.to_request(),
            Err(FormError::Invalid(ValidationError::EmptyName))
        );
    }
}
