pub mod i18n;

mod i18n_tests;
