//! One marker type per Route 53 operation.

use awsmarshal_client::protocol::{query, require};
use awsmarshal_client::{AwsQuery, Operation};
use awsmarshal_core::{Envelope, MarshalError, RawResponse, UnmarshalError};
use awsmarshal_query::ListStyle;

use crate::API_VERSION;
use crate::error::Route53Error;
use crate::input::{
    CreateHealthCheckInput, DeleteHealthCheckInput, GetHealthCheckCountInput,
    GetHealthCheckInput, ListHealthChecksInput, UpdateHealthCheckInput,
};
use crate::output::{
    CreateHealthCheckOutput, DeleteHealthCheckOutput, GetHealthCheckCountOutput,
    GetHealthCheckOutput, ListHealthChecksOutput, UpdateHealthCheckOutput,
};

/// Route 53 numbers list members as `Name.member.N`.
const LIST_STYLE: ListStyle = ListStyle::Member;

macro_rules! query_operation {
    ($op:ident, $input:ty, $output:ty, |$arg:ident| $validate:block) => {
        #[doc = concat!("The `", stringify!($op), "` operation.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl Operation for $op {
            type Input = $input;
            type Output = $output;
            type Error = Route53Error;
            type Protocol = AwsQuery;

            const NAME: &'static str = stringify!($op);

            fn marshall($arg: &$input) -> Result<Envelope, MarshalError> {
                $validate
                query::envelope(Self::NAME, API_VERSION, LIST_STYLE, $arg)
            }

            fn unmarshall(response: &RawResponse) -> Result<$output, UnmarshalError> {
                query::result(Self::NAME, response)
            }
        }
    };
}

query_operation!(CreateHealthCheck, CreateHealthCheckInput, CreateHealthCheckOutput, |input| {
    require("CreateHealthCheckInput", "CallerReference", input.caller_reference.as_ref())?;
    require("CreateHealthCheckInput", "HealthCheckConfig", input.health_check_config.as_ref())?;
});

query_operation!(GetHealthCheck, GetHealthCheckInput, GetHealthCheckOutput, |input| {
    require("GetHealthCheckInput", "HealthCheckId", input.health_check_id.as_ref())?;
});

query_operation!(ListHealthChecks, ListHealthChecksInput, ListHealthChecksOutput, |input| {});

query_operation!(UpdateHealthCheck, UpdateHealthCheckInput, UpdateHealthCheckOutput, |input| {
    require("UpdateHealthCheckInput", "HealthCheckId", input.health_check_id.as_ref())?;
});

query_operation!(DeleteHealthCheck, DeleteHealthCheckInput, DeleteHealthCheckOutput, |input| {
    require("DeleteHealthCheckInput", "HealthCheckId", input.health_check_id.as_ref())?;
});

query_operation!(GetHealthCheckCount, GetHealthCheckCountInput, GetHealthCheckCountOutput, |input| {});
