//! Shared site footer: brand tagline, company details, legal links.

use leptos::prelude::*;

use crate::i18n::use_i18n;

const COMPANY_NAME: &str = "silverithm";
const COMPANY_CEO: &str = "김준형";
const COMPANY_BUSINESS_NUMBER: &str = "107-21-26475";
const COMPANY_ADDRESS: &str = "서울특별시 신림동 1547-10";
const COMPANY_EMAIL: &str = "ggprgrkjh@naver.com";
const COMPANY_PHONE: &str = "010-4549-2094";

const PRIVACY_URL: &str =
    "https://relic-baboon-412.notion.site/2bc766a8bb4680839471f31909f3958c";
const TERMS_URL: &str =
    "https://relic-baboon-412.notion.site/2bc766a8bb46804daf77d521e89435ac";

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    view! {
      <footer class="site-footer">
        <div class="site-footer-inner">
          <div class="footer-brand">
            <span class="site-logo">"Chrobox"</span>
            <p class="footer-tagline">{move || i18n.t("footer.tagline")}</p>
          </div>

          <div class="footer-company">
            <h4>"회사 정보"</h4>
            <p>"회사명: " {COMPANY_NAME}</p>
            <p>"대표자: " {COMPANY_CEO}</p>
            <p>"사업자등록번호: " {COMPANY_BUSINESS_NUMBER}</p>
            <p>"주소: " {COMPANY_ADDRESS}</p>
            <p>"이메일: " {COMPANY_EMAIL}</p>
            <p>"전화: " {COMPANY_PHONE}</p>
          </div>

          <div class="footer-legal">
            <a href=PRIVACY_URL target="_blank" rel="noreferrer">
              "Privacy Policy"
            </a>
            <a href=TERMS_URL target="_blank" rel="noreferrer">
              "Terms of Service"
            </a>
          </div>
        </div>

        <p class="footer-copyright">"© 2024 " {COMPANY_NAME} ". All rights reserved."</p>
      </footer>
    }
}
