//! One marker type per RAM operation.
//!
//! | operation | method | path |
//! |-----------|--------|------|
//! | `CreateResourceShare` | POST | `/createresourceshare` |
//! | `GetResourceShares` | POST | `/getresourceshares` |
//! | `AssociateResourceShare` | POST | `/associateresourceshare` |
//! | `DeleteResourceShare` | DELETE | `/deleteresourceshare?resourceShareArn=..` |
//! | `ListResources` | POST | `/listresources` |
//! | `TagResource` | POST | `/tagresource` |

use awsmarshal_client::protocol::{json, require};
use awsmarshal_client::{AwsJson, Operation};
use awsmarshal_core::{Envelope, MarshalError, RawResponse, UnmarshalError};
use http::Method;

use crate::error::RamError;
use crate::input::{
    AssociateResourceShareInput, CreateResourceShareInput, DeleteResourceShareInput,
    GetResourceSharesInput, ListResourcesInput, TagResourceInput,
};
use crate::output::{
    AssociateResourceShareOutput, CreateResourceShareOutput, DeleteResourceShareOutput,
    GetResourceSharesOutput, ListResourcesOutput, TagResourceOutput,
};

macro_rules! post_operation {
    ($op:ident, $input:ty, $output:ty, $path:literal, |$arg:ident| $validate:block) => {
        #[doc = concat!("The `", stringify!($op), "` operation, `POST ", $path, "`.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl Operation for $op {
            type Input = $input;
            type Output = $output;
            type Error = RamError;
            type Protocol = AwsJson;

            const NAME: &'static str = stringify!($op);

            fn marshall($arg: &$input) -> Result<Envelope, MarshalError> {
                $validate
                json::rest_envelope(Self::NAME, Method::POST, $path)
                    .body(awsmarshal_json::to_body($arg)?)
                    .build()
            }

            fn unmarshall(response: &RawResponse) -> Result<$output, UnmarshalError> {
                json::output(response)
            }
        }
    };
}

post_operation!(
    CreateResourceShare,
    CreateResourceShareInput,
    CreateResourceShareOutput,
    "/createresourceshare",
    |input| {
        require("CreateResourceShareInput", "name", input.name.as_ref())?;
    }
);

post_operation!(
    GetResourceShares,
    GetResourceSharesInput,
    GetResourceSharesOutput,
    "/getresourceshares",
    |input| {
        require("GetResourceSharesInput", "resourceOwner", input.resource_owner.as_ref())?;
    }
);

post_operation!(
    AssociateResourceShare,
    AssociateResourceShareInput,
    AssociateResourceShareOutput,
    "/associateresourceshare",
    |input| {
        require("AssociateResourceShareInput", "resourceShareArn", input.resource_share_arn.as_ref())?;
    }
);

post_operation!(
    ListResources,
    ListResourcesInput,
    ListResourcesOutput,
    "/listresources",
    |input| {
        require("ListResourcesInput", "resourceOwner", input.resource_owner.as_ref())?;
    }
);

post_operation!(
    TagResource,
    TagResourceInput,
    TagResourceOutput,
    "/tagresource",
    |input| {
        require("TagResourceInput", "resourceShareArn", input.resource_share_arn.as_ref())?;
        require("TagResourceInput", "tags", input.tags.as_ref())?;
    }
);

/// The `DeleteResourceShare` operation, `DELETE /deleteresourceshare`.
#[derive(Debug, Clone, Copy)]
pub struct DeleteResourceShare;

impl Operation for DeleteResourceShare {
    type Input = DeleteResourceShareInput;
    type Output = DeleteResourceShareOutput;
    type Error = RamError;
    type Protocol = AwsJson;

    const NAME: &'static str = "DeleteResourceShare";

    fn marshall(input: &DeleteResourceShareInput) -> Result<Envelope, MarshalError> {
        let Some(arn) = input.resource_share_arn.as_deref() else {
            return Err(MarshalError::MissingField {
                shape: "DeleteResourceShareInput",
                field: "resourceShareArn",
            });
        };
        let mut builder = json::rest_envelope(Self::NAME, Method::DELETE, "/deleteresourceshare")
            .query_param("resourceShareArn", arn);
        if let Some(token) = &input.client_token {
            builder = builder.query_param("clientToken", token);
        }
        builder.build()
    }

    fn unmarshall(response: &RawResponse) -> Result<DeleteResourceShareOutput, UnmarshalError> {
        json::output(response)
    }
}
