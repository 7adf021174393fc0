/*
[INPUT]:  Route names
[OUTPUT]: Constant routes, the signed-in user's routes, existence checks
[POS]:    API layer - route rendering endpoints
[UPDATE]: When route endpoints change
*/

use serde::Serialize;

use super::SystemManageApi;
use crate::http::{RequestDescriptor, Result, Transport};
use crate::types::{MenuRoute, UserRoute};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteNameQuery<'a> {
    route_name: &'a str,
}

impl<T: Transport> SystemManageApi<T> {
    /// Routes rendered without authorization
    ///
    /// GET /route/getConstantRoutes
    pub async fn fetch_get_constant_routes(&self) -> Result<Vec<MenuRoute>> {
        self.send_list(RequestDescriptor::get("/route/getConstantRoutes"))
            .await
    }

    /// GET /route/getUserRoutes
    pub async fn fetch_get_user_routes(&self) -> Result<UserRoute> {
        self.send_json(RequestDescriptor::get("/route/getUserRoutes"))
            .await
    }

    /// GET /route/isRouteExist?routeName={route_name}
    pub async fn fetch_is_route_exist(&self, route_name: &str) -> Result<bool> {
        let descriptor = RequestDescriptor::get("/route/isRouteExist")
            .with_params(&RouteNameQuery { route_name })?;
        self.send_json(descriptor).await
    }
}
