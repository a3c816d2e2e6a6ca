use payloads::{Company, CompanyId, ResourcePath};
use yew::prelude::*;

use super::{CompanyAssetsTab, CompanyCoverTab, CompanyUnitsTab, CompanyUsersTab};
use crate::CompanyTab;
use crate::components::CompanyTabHeader;
use crate::hooks::{use_get_data, use_title};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub company_id: CompanyId,
    pub tab: CompanyTab,
}

#[function_component]
pub fn CompanyViewPage(props: &Props) -> Html {
    let company_id = props.company_id;
    let company =
        use_get_data::<Company>(ResourcePath::Company(company_id), true);
    let title = company
        .data
        .as_ref()
        .map(|company| format!("{} | {}", company.name, props.tab.label()))
        .unwrap_or_else(|| "Empresa".to_string());
    use_title(&title);

    let active_tab = props.tab;
    company.render("empresa", |company| {
        let content = match active_tab {
            CompanyTab::Cover => html! { <CompanyCoverTab {company_id} /> },
            CompanyTab::Units => html! { <CompanyUnitsTab {company_id} /> },
            CompanyTab::Users => html! { <CompanyUsersTab {company_id} /> },
            CompanyTab::Assets => html! { <CompanyAssetsTab {company_id} /> },
        };
        html! {
            <div class="space-y-6">
                <CompanyTabHeader company={company.clone()} {active_tab} />
                {content}
            </div>
        }
    })
}
