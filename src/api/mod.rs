mod chain;
mod health;
pub mod models;
mod peers;
mod tx;

use actix_web::web::{self, ServiceConfig};

use crate::error::NodeError;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| NodeError::MalformedBody(err.to_string()).into()),
    )
    .service(health::health_check)
    .service(chain::get_chain)
    .service(chain::is_valid)
    .service(chain::mine_block)
    .service(chain::replace_chain)
    .service(tx::add_transaction)
    .service(tx::get_pending)
    .service(peers::connect_node)
    .service(peers::list_nodes);
}
