mod validator;
