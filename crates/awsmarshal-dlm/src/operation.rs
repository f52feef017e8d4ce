//! One marker type per DLM operation.

use awsmarshal_client::protocol::{json, label, require};
use awsmarshal_client::{AwsJson, Operation};
use awsmarshal_core::{Envelope, MarshalError, RawResponse, UnmarshalError};
use http::Method;

use crate::error::DlmError;
use crate::input::{
    CreateLifecyclePolicyInput, DeleteLifecyclePolicyInput, GetLifecyclePoliciesInput,
    GetLifecyclePolicyInput, UpdateLifecyclePolicyInput,
};
use crate::output::{
    CreateLifecyclePolicyOutput, DeleteLifecyclePolicyOutput, GetLifecyclePoliciesOutput,
    GetLifecyclePolicyOutput, UpdateLifecyclePolicyOutput,
};

macro_rules! rest_operation {
    ($op:ident, $input:ty, $output:ty) => {
        #[doc = concat!("The `", stringify!($op), "` operation.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $op;

        impl Operation for $op {
            type Input = $input;
            type Output = $output;
            type Error = DlmError;
            type Protocol = AwsJson;

            const NAME: &'static str = stringify!($op);

            fn marshall(input: &$input) -> Result<Envelope, MarshalError> {
                Self::envelope(input)
            }

            fn unmarshall(response: &RawResponse) -> Result<$output, UnmarshalError> {
                json::output(response)
            }
        }
    };
}

rest_operation!(CreateLifecyclePolicy, CreateLifecyclePolicyInput, CreateLifecyclePolicyOutput);
rest_operation!(GetLifecyclePolicy, GetLifecyclePolicyInput, GetLifecyclePolicyOutput);
rest_operation!(GetLifecyclePolicies, GetLifecyclePoliciesInput, GetLifecyclePoliciesOutput);
rest_operation!(UpdateLifecyclePolicy, UpdateLifecyclePolicyInput, UpdateLifecyclePolicyOutput);
rest_operation!(DeleteLifecyclePolicy, DeleteLifecyclePolicyInput, DeleteLifecyclePolicyOutput);

impl CreateLifecyclePolicy {
    fn envelope(input: &CreateLifecyclePolicyInput) -> Result<Envelope, MarshalError> {
        const SHAPE: &str = "CreateLifecyclePolicyInput";
        require(SHAPE, "ExecutionRoleArn", input.execution_role_arn.as_ref())?;
        require(SHAPE, "Description", input.description.as_ref())?;
        require(SHAPE, "State", input.state.as_ref())?;
        require(SHAPE, "PolicyDetails", input.policy_details.as_ref())?;
        json::rest_envelope(Self::NAME, Method::POST, "/policies")
            .body(awsmarshal_json::to_body(input)?)
            .build()
    }
}

impl GetLifecyclePolicy {
    fn envelope(input: &GetLifecyclePolicyInput) -> Result<Envelope, MarshalError> {
        let id = label("GetLifecyclePolicyInput", "PolicyId", input.policy_id.as_deref())?;
        json::rest_envelope(Self::NAME, Method::GET, format!("/policies/{id}/")).build()
    }
}

impl GetLifecyclePolicies {
    fn envelope(input: &GetLifecyclePoliciesInput) -> Result<Envelope, MarshalError> {
        let mut builder = json::rest_envelope(Self::NAME, Method::GET, "/policies");
        for id in input.policy_ids.iter().flatten() {
            builder = builder.query_param("policyIds", id);
        }
        if let Some(state) = &input.state {
            builder = builder.query_param("state", state.as_str());
        }
        for resource_type in input.resource_types.iter().flatten() {
            builder = builder.query_param("resourceTypes", resource_type.as_str());
        }
        for tag in input.target_tags.iter().flatten() {
            builder = builder.query_param("targetTags", tag);
        }
        for tag in input.tags_to_add.iter().flatten() {
            builder = builder.query_param("tagsToAdd", tag);
        }
        builder.build()
    }
}

impl UpdateLifecyclePolicy {
    fn envelope(input: &UpdateLifecyclePolicyInput) -> Result<Envelope, MarshalError> {
        let id = label("UpdateLifecyclePolicyInput", "PolicyId", input.policy_id.as_deref())?;
        json::rest_envelope(Self::NAME, Method::PATCH, format!("/policies/{id}"))
            .body(awsmarshal_json::to_body(input)?)
            .build()
    }
}

impl DeleteLifecyclePolicy {
    fn envelope(input: &DeleteLifecyclePolicyInput) -> Result<Envelope, MarshalError> {
        let id = label("DeleteLifecyclePolicyInput", "PolicyId", input.policy_id.as_deref())?;
        json::rest_envelope(Self::NAME, Method::DELETE, format!("/policies/{id}/")).build()
    }
}
