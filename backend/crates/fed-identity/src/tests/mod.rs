mod password_policy;
