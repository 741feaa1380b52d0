//! Application shell: top header, sidebar navigation and the active page.

pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;

use crate::domain::a001_broker::ui::list::BrokerList;
use crate::domain::a002_broker_key::ui::list::BrokerKeyList;
use crate::domain::a003_trade::ui::list::TradeList;
use crate::system::users::ui::list::UsersListPage;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Page shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    #[default]
    Brokers,
    BrokerKeys,
    Trades,
    Users,
}

impl ActivePage {
    pub const ALL: [ActivePage; 4] = [Self::Brokers, Self::BrokerKeys, Self::Trades, Self::Users];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brokers => "Brokers",
            Self::BrokerKeys => "Broker keys",
            Self::Trades => "Trades",
            Self::Users => "Users",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Brokers => "brokers",
            Self::BrokerKeys => "keys",
            Self::Trades => "trades",
            Self::Users => "users",
        }
    }

    pub fn admin_only(&self) -> bool {
        matches!(self, Self::Users)
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let active = RwSignal::new(ActivePage::default());

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar active=active />
                <div class="app-main">
                    {move || match active.get() {
                        ActivePage::Brokers => view! { <BrokerList /> }.into_any(),
                        ActivePage::BrokerKeys => view! { <BrokerKeyList /> }.into_any(),
                        ActivePage::Trades => view! { <TradeList /> }.into_any(),
                        ActivePage::Users => view! { <UsersListPage /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_users_page_is_admin_only() {
        let admin_pages: Vec<_> = ActivePage::ALL.iter().filter(|p| p.admin_only()).collect();
        assert_eq!(admin_pages, vec![&ActivePage::Users]);
        assert_eq!(ActivePage::default(), ActivePage::Brokers);
    }
}
