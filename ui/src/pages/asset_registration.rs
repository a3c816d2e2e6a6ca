use jiff::Timestamp;
use payloads::{
    Asset, AssetId, AssetMetrics, AssetSpecifications, AssetStatus, Company,
    CompanyId, ResourcePath, Unit, UnitId, requests::AssetData,
};
use yew::prelude::*;

use super::registration::{
    FormError, company_options, company_units_path, delete_handlers,
    entity_path, first_error, has_saved, id_value, optional_to_field, parse_count, parse_decimal,
    parse_id, parse_optional_decimal, save_handlers, unit_options,
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

/// Every asset field as typed, parsed only on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetForm {
    pub name: String,
    pub model: String,
    pub status: AssetStatus,
    pub healthscore: String,
    pub image: String,
    pub max_temp: String,
    pub power: String,
    pub rpm: String,
    pub total_collects_uptime: String,
    pub total_uptime: String,
    /// RFC 3339
    pub last_uptime_at: String,
    /// Comma separated
    pub sensors: String,
    pub company_id: Option<CompanyId>,
    pub unit_id: Option<UnitId>,
}

impl Default for AssetForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            status: AssetStatus::InOperation,
            healthscore: String::new(),
            image: String::new(),
            max_temp: String::new(),
            power: String::new(),
            rpm: String::new(),
            total_collects_uptime: "0".into(),
            total_uptime: "0".into(),
            last_uptime_at: Timestamp::now().to_string(),
            sensors: String::new(),
            company_id: None,
            unit_id: None,
        }
    }
}

impl From<&Asset> for AssetForm {
    fn from(asset: &Asset) -> Self {
        let specs = &asset.specifications;
        let metrics = &asset.metrics;
        Self {
            name: asset.name.clone(),
            model: asset.model.clone(),
            status: asset.status,
            healthscore: asset.healthscore.to_string(),
            image: asset.image.clone(),
            max_temp: optional_to_field(specs.max_temp),
            power: optional_to_field(specs.power),
            rpm: optional_to_field(specs.rpm),
            total_collects_uptime: metrics.total_collects_uptime.to_string(),
            total_uptime: metrics.total_uptime.to_string(),
            last_uptime_at: metrics.last_uptime_at.to_string(),
            sensors: asset.sensors.join(", "),
            company_id: Some(asset.company_id),
            unit_id: Some(asset.unit_id),
        }
    }
}

impl AssetForm {
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

    pub fn to_request(&self) -> Result<AssetData, FormError> {
        let last_uptime_at = self
            .last_uptime_at
            .trim()
            .parse::<Timestamp>()
            .map_err(|_| FormError::InvalidTimestamp("última coleta"))?;

        let data = AssetData {
            name: self.name.trim().to_string(),
            model: self.model.trim().to_string(),
            status: self.status,
            healthscore: parse_decimal("saúde", &self.healthscore)?,
            image: self.image.trim().to_string(),
            specifications: AssetSpecifications {
                max_temp: parse_optional_decimal(
                    "temperatura máxima",
                    &self.max_temp,
                )?,
                power: parse_optional_decimal("potência", &self.power)?,
                rpm: parse_optional_decimal("rpm", &self.rpm)?,
            },
            metrics: AssetMetrics {
                total_collects_uptime: parse_count(
                    "total de coletas",
                    &self.total_collects_uptime,
                )?,
                total_uptime: parse_decimal(
                    "total de horas",
                    &self.total_uptime,
                )?,
                last_uptime_at,
            },
            sensors: self
                .sensors
                .split(',')
                .map(str::trim)
                .filter(|sensor| !sensor.is_empty())
                .map(str::to_string)
                .collect(),
            company_id: self.company_id.ok_or(FormError::MissingCompany)?,
            unit_id: self.unit_id.ok_or(FormError::MissingUnit)?,
        };
        data.validate()?;
        Ok(data)
    }
}

fn assets_tab(company_id: CompanyId) -> Route {
    Route::Company {
        company_id,
        tab: CompanyTab::Assets,
    }
}

fn status_options() -> Vec<(String, String)> {
    AssetStatus::ALL
        .iter()
        .map(|status| (status.to_string(), status.label().to_string()))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub mode: FormMode<AssetId>,
}

#[function_component]
pub fn AssetRegistrationPage(props: &Props) -> Html {
    let mode = props.mode;
    let title = if mode.is_edit() {
        "Editar Ativo"
    } else {
        "Cadastrar Ativo"
    };
    use_title(title);

    let toast = use_toast();
    let push_route = use_push_route();
    let path =
        entity_path(mode.id(), ResourcePath::Asset, ResourcePath::Assets);
    let asset = use_get_data::<Asset>(path, mode.is_edit());
    let companies = use_get_data::<Vec<Company>>(ResourcePath::Companies, true);
    let form = use_state(AssetForm::default);
    let (units_path, has_company) = company_units_path(form.company_id);
    let units = use_get_data::<Vec<Unit>>(units_path, has_company);

    {
        let form = form.clone();
        use_effect_with((mode, asset.data.clone()), move |(mode, asset)| {
            match asset {
                Some(asset) => form.set(AssetForm::from(asset)),
                None if !mode.is_edit() => form.set(AssetForm::default()),
                None => {}
            }
        });
    }

    let save = save_handlers(
        mode.expected_status(),
        toast.clone(),
        push_route.clone(),
        if mode.is_edit() {
            "Ativo atualizado"
        } else {
            "Ativo cadastrado"
        },
        |asset: &Asset| assets_tab(asset.company_id),
    );
    let (create, creating) =
        use_post_data::<AssetData, Asset>(ResourcePath::Assets, save.clone());
    let (update, updating) = use_put_data::<AssetData, Asset>(path, save);
    let after_delete = asset
        .data
        .as_ref()
        .map(|asset| assets_tab(asset.company_id))
        .unwrap_or(Route::Companies);
    let (delete, deleting) = use_delete_data(
        path,
        delete_handlers(
            toast.clone(),
            push_route.clone(),
            "Ativo removido",
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

    // one setter per text field
    let text_setter = |apply: fn(&mut AssetForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_status = text_setter(|form, value| {
        if let Some(status) = AssetStatus::from_wire(&value) {
            form.status = status;
        }
    });
    let on_company = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.set(form.with_company(parse_id(&value)))
        })
    };
    let on_unit = text_setter(|form, value| form.unit_id = parse_id(&value));

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
            entity_label="Ativo"
            is_edit={mode.is_edit()}
            is_saving={creating.is_loading || updating.is_loading}
            is_deleting={deleting.is_loading}
            {is_saved}
            {error}
            {on_submit}
            on_cancel={go_back}
            on_delete={delete}
        >
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextField id="asset-name" label="Nome" value={form.name.clone()}
                    on_change={text_setter(|form, value| form.name = value)} />
                <TextField id="asset-model" label="Modelo" value={form.model.clone()}
                    on_change={text_setter(|form, value| form.model = value)}
                    placeholder="motor, fan..." />
                <SelectField id="asset-status" label="Status"
                    value={form.status.to_string()}
                    options={status_options()}
                    on_change={on_status} />
                <TextField id="asset-healthscore" label="Saúde (%)"
                    input_type="number" value={form.healthscore.clone()}
                    on_change={text_setter(|form, value| form.healthscore = value)} />
                <TextField id="asset-image" label="Imagem (URL)" value={form.image.clone()}
                    on_change={text_setter(|form, value| form.image = value)} />
                <TextField id="asset-sensors" label="Sensores" value={form.sensors.clone()}
                    on_change={text_setter(|form, value| form.sensors = value)}
                    placeholder="GSJ1535, HIO4510" />
                <TextField id="asset-max-temp" label="Temperatura máxima (°C)"
                    input_type="number" value={form.max_temp.clone()}
                    on_change={text_setter(|form, value| form.max_temp = value)} />
                <TextField id="asset-power" label="Potência (kWh)"
                    input_type="number" value={form.power.clone()}
                    on_change={text_setter(|form, value| form.power = value)} />
                <TextField id="asset-rpm" label="RPM"
                    input_type="number" value={form.rpm.clone()}
                    on_change={text_setter(|form, value| form.rpm = value)} />
                <TextField id="asset-collects" label="Total de coletas"
                    input_type="number" value={form.total_collects_uptime.clone()}
                    on_change={text_setter(|form, value| form.total_collects_uptime = value)} />
                <TextField id="asset-uptime" label="Total de horas em operação"
                    input_type="number" value={form.total_uptime.clone()}
                    on_change={text_setter(|form, value| form.total_uptime = value)} />
                <TextField id="asset-last-uptime" label="Última coleta"
                    value={form.last_uptime_at.clone()}
                    on_change={text_setter(|form, value| form.last_uptime_at = value)}
                    placeholder="2021-02-16T16:17:50Z" />
                <SelectField id="asset-company" label="Empresa"
                    value={id_value(form.company_id)}
                    options={company_choices}
                    on_change={on_company}
                    disabled={companies.is_loading} />
                <SelectField id="asset-unit" label="Unidade"
                    value={id_value(form.unit_id)}
                    options={unit_choices}
                    on_change={on_unit}
                    placeholder={if has_company { "Selecione..." } else { "Selecione uma empresa primeiro" }}
                    disabled={!has_company || units.is_loading} />
            </div>
        </RegistrationForm>
    };

    if mode.is_edit() {
        asset.render("ativo", |_| page)
    } else {
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motor() -> Asset {
        Asset {
            id: AssetId(1),
            name: "Motor H13D-1".into(),
            model: "motor".into(),
            status: AssetStatus::InAlert,
            healthscore: 70.0,
            image: "https://example.com/motor.jpg".into(),
            specifications: AssetSpecifications {
                max_temp: Some(80.0),
                power: None,
                rpm: Some(1500.0),
            },
            metrics: AssetMetrics {
                total_collects_uptime: 7516,
                total_uptime: 1419.55,
                last_uptime_at: "2021-02-16T16:17:50.18Z".parse().unwrap(),
            },
            sensors: vec!["GSJ1535".into(), "HIO4510".into()],
            unit_id: UnitId(3),
            company_id: CompanyId(42),
        }
    }

    #[test]
    fn prefilled_form_submits_the_same_asset() {
        let form = AssetForm::from(&motor());
        assert_eq!(form.sensors, "GSJ1535, HIO4510");
        assert_eq!(form.power, "");
        assert_eq!(form.to_request(), Ok(AssetData::from(&motor())));
    }

    #[test]
    fn healthscore_must_be_a_percentage() {
        let form = AssetForm {
            healthscore: "101".into(),
            ..AssetForm::from(&motor())
        };
        assert!(matches!(form.to_request(), Err(FormError::Invalid(_))));

        let form = AssetForm {
            healthscore: "".into(),
            ..AssetForm::from(&motor())
        };
        assert_eq!(form.to_request(), Err(FormError::InvalidNumber("saúde")));
    }

    #[test]
    fn blank_optional_specifications_are_omitted() {
        let form = AssetForm {
            max_temp: " ".into(),
            rpm: "".into(),
            ..AssetForm::from(&motor())
        };
        let data = form.to_request().unwrap();
        assert_eq!(data.specifications, AssetSpecifications::default());
    }

    #[test]
    fn new_assets_need_company_and_unit() {
        let form = AssetForm {
            name: "Ventilador D22".into(),
            healthscore: "48.3".into(),
            ..AssetForm::default()
        };
        assert_eq!(form.to_request(), Err(FormError::MissingCompany));

        let form = form.with_company(Some(CompanyId(42)));
        assert_eq!(form.to_request(), Err(FormError::MissingUnit));
    }

    #[test]
    fn malformed_timestamp_is_reported() {
        let form = AssetForm {
            last_uptime_at: "16/02/2021".into(),
            ..AssetForm::from(&motor())
        };
        assert_eq!(
            form.to_request(),
            Err(FormError::InvalidTimestamp("última coleta"))
        );
    }
}
