use payloads::{
    Company, CompanyId, ResourcePath, Unit, UnitId, User, UserId,
    requests::UserData,
};
use yew::prelude::*;

use super::registration::{
    FormError, company_options, company_units_path, delete_handlers,
    entity_path, first_error, has_saved, id_value, parse_id, save_handlers, unit_options,
};
use crate::{
    CompanyTab, FormMode, Route,
    components::{RegistrationForm, SelectField, TextField},
    contexts::use_toast,
    hooks::{
        use_delete_data, use_get_data, use_go_back, use_post_data,
        use_push_route, use_put_data, use_title,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub company_id: Option<CompanyId>,
    pub unit_id: Option<UnitId>,
}

impl From<&User> for UserForm {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            company_id: Some(user.company_id),
            unit_id: Some(user.unit_id),
        }
    }
}

impl UserForm {
    /// Choosing another company invalidates the chosen unit.
    pub fn with_company(&self, company_id: Option<CompanyId>) -> Self {
        let unit_id = if company_id == self.company_id {
            self.unit_id
        } else {
            None
        };
        Self {
            company_id,
            unit_id,
            ..self.clone()
        }
    }

    pub fn to_request(&self) -> Result<UserData, FormError> {
        let data = UserData {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company_id: self.company_id.ok_or(FormError::MissingCompany)?,
            unit_id: self.unit_id.ok_or(FormError::MissingUnit)?,
        };
        data.validate()?;
        Ok(data)
    }
}

fn users_tab(company_id: CompanyId) -> Route {
    Route::Company {
        company_id,
        tab: CompanyTab::Users,
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: FormMode<UserId>,
}

#[function_component]
pub fn UserRegistrationPage(props: &Props) -> Html {
    let mode = props.mode;
    let title = if mode.is_edit() {
        "Editar Usuário"
    } else {
        "Cadastrar Usuário"
    };
    use_title(title);

    let toast = use_toast();
    let push_route = use_push_route();
    let path = entity_path(mode.id(), ResourcePath::User, ResourcePath::Users);
    let user = use_get_data::<User>(path, mode.is_edit());
    let companies = use_get_data::<Vec<Company>>(ResourcePath::Companies, true);
    let form = use_state(UserForm::default);
    let (units_path, has_company) = company_units_path(form.company_id);
    let units = use_get_data::<Vec<Unit>>(units_path, has_company);

    {
        let form = form.clone();
        use_effect_with((mode, user.data.clone()), move |(mode, user)| {
            match user {
                Some(user) => form.set(UserForm::from(user)),
                None if !mode.is_edit() => form.set(UserForm::default()),
                None => {}
            }
        });
    }

    let save = save_handlers(
        mode.expected_status(),
        toast.clone(),
        push_route.clone(),
        if mode.is_edit() {
            "Usuário atualizado"
        } else {
            "Usuário cadastrado"
        },
        |user: &User| users_tab(user.company_id),
    );
    let (create, creating) =
        use_post_data::<UserData, User>(ResourcePath::Users, save.clone());
    let (update, updating) = use_put_data::<UserData, User>(path, save);
    let after_delete = user
        .data
        .as_ref()
        .map(|user| users_tab(user.company_id))
        .unwrap_or(Route::Companies);
    let (delete, deleting) = use_delete_data(
        path,
        delete_handlers(
            toast.clone(),
            push_route.clone(),
            "Usuário removido",
            after_delete.clone(),
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

    let on_name = {
        let form = form.clone();
        Callback::from(move |name: String| {
            form.set(UserForm {
                name,
                ..(*form).clone()
            })
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |email: String| {
            form.set(UserForm {
                email,
                ..(*form).clone()
            })
        })
    };
    let on_company = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(form.with_company(parse_id(&value)))
        })
    };
    let on_unit = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(UserForm {
                unit_id: parse_id(&value),
                ..(*form).clone()
            })
        })
    };

    let company_choices = companies
        .data
        .as_deref()
        .map(company_options)
        .unwrap_or_default();
    let unit_choices = units
        .data
        .as_deref()
        .map(unit_options)
        .unwrap_or_default();
    let cancel_route = match mode {
        FormMode::Create => Route::Companies,
        FormMode::Edit(_) => after_delete,
    };
    let go_back = use_go_back(cancel_route);

    let error =
        first_error(&[&creating.error, &updating.error, &deleting.error]);
    let is_saved = has_saved(&creating, mode.expected_status())
        || has_saved(&updating, mode.expected_status());

    let page = html! {
        <RegistrationForm
            title={title}
            entity_label="Usuário"
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
                id="user-name"
                label="Nome"
                value={form.name.clone()}
                on_change={on_name}
                placeholder="Nome completo"
            />
            <TextField
                id="user-email"
                label="Email"
                input_type="email"
                value={form.email.clone()}
                on_change={on_email}
                placeholder="nome@empresa.com"
            />
            <SelectField
                id="user-company"
                label="Empresa"
                value={id_value(form.company_id)}
                options={company_choices}
                on_change={on_company}
                disabled={companies.is_loading}
            />
            <SelectField
                id="user-unit"
                label="Unidade"
                value={id_value(form.unit_id)}
                options={unit_choices}
                on_change={on_unit}
                placeholder={if has_company { "Selecione..." } else { "Selecione uma empresa primeiro" }}
                disabled={!has_company || units.is_loading}
            />
        </RegistrationForm>
    };

    if mode.is_edit() {
        user.render("usuário", |_| page)
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> User {
        User {
            id: UserId(5),
            name: "Ana".into(),
            email: "ana@tractian.com".into(),
            company_id: CompanyId(42),
            unit_id: UnitId(3),
        }
    }

    #[test]
    fn edit_form_is_prefilled_from_the_user() {
        let form = UserForm::from(&ana());
        assert_eq!(form.to_request(), Ok(UserData::from(&ana())));
    }

    #[test]
    fn changing_company_clears_the_unit() {
        let form = UserForm::from(&ana());
        assert_eq!(form.with_company(Some(CompanyId(42))).unit_id, Some(UnitId(3)));

        let moved = form.with_company(Some(CompanyId(7)));
        assert_eq!(moved.unit_id, None);
        assert_eq!(moved.to_request(), Err(FormError::MissingUnit));
    }

    #[test]
    fn malformed_email_is_rejected_before_submit() {
        let form = UserForm {
            email: "ana".into(),
            ..UserForm::from(&ana())
        };
        assert!(matches!(form.to_request(), Err(FormError::Invalid(_))));
    }
}
