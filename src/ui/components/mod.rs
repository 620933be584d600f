pub mod kpi_card;
pub mod shipping_table;
pub mod toast;
pub mod trace_list;
