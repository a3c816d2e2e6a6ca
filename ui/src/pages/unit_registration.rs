use payloads::{Company, CompanyId, ResourcePath, Unit, UnitId, requests::UnitData};
use yew::prelude::*;

use super::registration::{
    FormError, company_options, delete_handlers, entity_path, first_error,
    has_saved, id_value, parse_id, save_handlers,
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
pub struct UnitForm {
    pub name: String,
    pub company_id: Option<CompanyId>,
}

impl From<&Unit> for UnitForm {
    fn from(unit: &Unit) -> Self {
        Self {
            name: unit.name.clone(),
            company_id: Some(unit.company_id),
        }
    }
}

impl UnitForm {
    pub fn to_request(&self) -> Result<UnitData, FormError> {
        let data = UnitData {
            name: self.name.trim().to_string(),
            company_id: self.company_id.ok_or(FormError::MissingCompany)?,
        };
        data.validate()?;
        Ok(data)
    }
}

fn units_tab(company_id: CompanyId) -> Route {
    Route::Company {
        company_id,
        tab: CompanyTab::Units,
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: FormMode<UnitId>,
}

#[function_component]
pub fn UnitRegistrationPage(props: &Props) -> Html {
    let mode = props.mode;
    let title = if mode.is_edit() {
        "Editar Unidade"
    } else {
        "Cadastrar Unidade"
    };
    use_title(title);

    let toast = use_toast();
    let push_route = use_push_route();
    let path = entity_path(mode.id(), ResourcePath::Unit, ResourcePath::Units);
    let unit = use_get_data::<Unit>(path, mode.is_edit());
    let companies = use_get_data::<Vec<Company>>(ResourcePath::Companies, true);
    let form = use_state(UnitForm::default);

    {
        let form = form.clone();
        use_effect_with((mode, unit.data.clone()), move |(mode, unit)| {
            match unit {
                Some(unit) => form.set(UnitForm::from(unit)),
                None if !mode.is_edit() => form.set(UnitForm::default()),
                None => {}
            }
        });
    }

    let save = save_handlers(
        mode.expected_status(),
        toast.clone(),
        push_route.clone(),
        if mode.is_edit() {
            "Unidade atualizada"
        } else {
            "Unidade cadastrada"
        },
        |unit: &Unit| units_tab(unit.company_id),
    );
    let (create, creating) =
        use_post_data::<UnitData, Unit>(ResourcePath::Units, save.clone());
    let (update, updating) = use_put_data::<UnitData, Unit>(path, save);
    let after_delete = unit
        .data
        .as_ref()
        .map(|unit| units_tab(unit.company_id))
        .unwrap_or(Route::Companies);
    let (delete, deleting) = use_delete_data(
        path,
        delete_handlers(
            toast.clone(),
            push_route.clone(),
            "Unidade removida",
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
            form.set(UnitForm {
                name,
                ..(*form).clone()
            })
        })
    };
    let on_company = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(UnitForm {
                company_id: parse_id(&value),
                ..(*form).clone()
            })
        })
    };

    let company_choices = companies
        .data
        .as_deref()
        .map(company_options)
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
            entity_label="Unidade"
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
                id="unit-name"
                label="Nome"
                value={form.name.clone()}
                on_change={on_name}
                placeholder="Nome da unidade"
            />
            <SelectField
                id="unit-company"
                label="Empresa"
                value={id_value(form.company_id)}
                options={company_choices}
                on_change={on_company}
                disabled={companies.is_loading}
            />
        </RegistrationForm>
    };

    if mode.is_edit() {
        unit.render("unidade", |_| page)
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    #[test]
    fn edit_form_is_prefilled_from_the_unit() {
        let unit = Unit {
            id: UnitId(3),
            name: "Unidade Jaguar".into(),
            company_id: CompanyId(42),
        };
        assert_eq!(UnitForm::from(&unit), UnitForm {
            name: "Unidade Jaguar".into(),
            company_id: Some(CompanyId(42)),
        });
    }

    #[test]
    fn a_unit_needs_a_company() {
        let form = UnitForm {
            name: "Unidade Jaguar".into(),
            company_id: None,
        };
        assert_eq!(form.to_request(), Err(FormError::MissingCompany));
    }

    #[test]
    fn saved_units_return_to_their_company_tab() {
        assert_eq!(
            units_tab(CompanyId(42)).to_path(),
            "/empresas/42/unidades"
        );
    }
}
